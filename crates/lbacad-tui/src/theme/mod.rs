//! Visual theme: palette, shared styles, and icon set

pub mod icons;
pub mod palette;
pub mod styles;
