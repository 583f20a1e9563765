mod classification;
mod common;
mod logging;
mod scoring;
