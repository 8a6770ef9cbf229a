//! Cross-module test suites for the block system
//!
//! Unit tests live next to the code they cover; the suites here exercise the
//! registry, factory and aggregator together.

#[cfg(test)]
mod support;
#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod integration;
