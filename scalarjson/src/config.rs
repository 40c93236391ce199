// SPDX-License-Identifier: Apache-2.0

//! Compile-time parser configuration.

/// Configuration trait for [`Parser`](crate::Parser) - selects grammar and root-checking behavior.
pub trait ParserConfig {
    /// Accept integer parts with leading zeros such as `0000123`.
    ///
    /// When disabled, an integer part is either `0` or starts with `1`-`9`, and
    /// any digits following a lone `0` are left unconsumed.
    const ALLOW_LEADING_ZEROS: bool;

    /// Check root singularity once, after every value, at the dispatcher.
    ///
    /// When enabled, whitespace may follow the root value and anything else
    /// fails with `RootNotSingular`. When disabled, the literal matcher rejects
    /// any byte after a literal, a number must span the rest of the input,
    /// and nothing is checked after a string.
    const UNIFORM_ROOT_CHECK: bool;
}

/// Default configuration: leading zeros accepted, singularity enforced only by literals.
pub struct DefaultConfig;

impl ParserConfig for DefaultConfig {
    const ALLOW_LEADING_ZEROS: bool = true;
    const UNIFORM_ROOT_CHECK: bool = false;
}

/// Strict RFC 8259 root handling: no leading zeros, trailing whitespace allowed,
/// any other trailing content rejected after every kind of value.
pub struct Rfc8259Config;

impl ParserConfig for Rfc8259Config {
    const ALLOW_LEADING_ZEROS: bool = false;
    const UNIFORM_ROOT_CHECK: bool = true;
}

/// Parser configuration from const parameters.
///
/// Example: `ConfigStruct<true, true>` keeps leading zeros but checks the root uniformly.
/// ```rust
/// # use scalarjson::{ConfigStruct, Parser};
/// let value = Parser::<ConfigStruct<true, true>>::with_config("007 ").parse().unwrap();
/// assert_eq!(value.get_number(), Ok(7.0));
/// ```
pub struct ConfigStruct<const LEADING_ZEROS: bool, const UNIFORM_ROOT: bool>;

impl<const LEADING_ZEROS: bool, const UNIFORM_ROOT: bool> ParserConfig
    for ConfigStruct<LEADING_ZEROS, UNIFORM_ROOT>
{
    const ALLOW_LEADING_ZEROS: bool = LEADING_ZEROS;
    const UNIFORM_ROOT_CHECK: bool = UNIFORM_ROOT;
}
