//! Sentence normalization: conversion, region inference and fallback.

pub mod converter;
pub mod engine;
pub mod fallback;
pub mod region;

pub use converter::{ConversionResult, SentenceConverter, convert};
pub use engine::{Normalizer, TranslationResponse};
pub use fallback::{FallbackDecision, FallbackGate, clean_fallback_text};
pub use region::{UNKNOWN_REGION, infer_region};
