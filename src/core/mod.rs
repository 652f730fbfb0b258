/// Core module for string annotation
///
/// This module contains the reference data, the line normalizer, the
/// individual classifiers and the annotator that chains them together.

pub mod annotator;
pub mod classifiers;
pub mod internet;
pub mod normalizer;
pub mod tables;
pub mod win32_api;
