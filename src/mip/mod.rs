pub(crate) mod chain;
pub(crate) mod downsample;
pub(crate) mod image;
pub(crate) mod layers;
pub(crate) mod options;
