//! Typed values for every decoded region of the base block.

pub mod chromaticity;
pub mod display;
pub mod features;
pub mod identification;
pub mod timings;
pub mod video_input;

pub use chromaticity::{Chromaticity, Coordinate, Point};
pub use display::{Gamma, ScreenSize};
pub use features::{DisplayType, Features};
pub use identification::{ManufactureDate, ManufacturerId, ProductCode, SerialNumber, Version};
pub use timings::{AspectRatio, EstablishedTimings, StandardTiming, StandardTimings};
pub use video_input::{
    AnalogInput, BitDepth, DigitalInput, Interface, SignalLevel, SyncTypes, VideoInput,
};
