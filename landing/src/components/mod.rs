// Shared building blocks for the page sections

pub mod icons;

pub use icons::Icon;
