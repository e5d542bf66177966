// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

/// Display formats a parsed number can be rendered in.
///
/// For the Stockholm number with country code `46`, destination code `8`
/// and subscriber number `7740212`:
/// - **E164**: `+4687740212`
/// - **INTERNATIONAL**: `+46 8 774 02 12`
/// - **NATIONAL**: `08-774 02 12`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// A plus sign followed by all digits, no separators.
    E164,
    /// **International format.**
    /// Country code, destination code and grouped subscriber number
    /// separated by spaces.
    International,
    /// **National format.**
    /// Trunk prefix and destination code, a hyphen, then the grouped
    /// subscriber number. No country code.
    National,
}

/// The part of the number the scanner is currently accumulating digits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ParsingState {
    CountryCode,
    AreaCode,
    Subscriber,
}
