//! This crate provides the concrete demo definitions for the gallery, along with the [`Demo`]
//! trait and the [`DemoList`] enum used to dispatch over them.

pub(crate) mod bounce_cards;
pub(crate) mod dither;
pub(crate) mod list;
pub(crate) mod traits;

pub use self::{
    bounce_cards::BounceCards,
    dither::Dither,
    list::DemoList,
    traits::Demo,
};
