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

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::phonenumber::helper_constants::LAYOUT_WHITESPACE;

static LAYOUT_WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LAYOUT_WHITESPACE).expect("Invalid constant pattern!"));

/// Removes spaces, tabs and newlines. Returns the input borrowed if there
/// was nothing to remove.
pub fn strip_layout_whitespace(s: &str) -> Cow<'_, str> {
    LAYOUT_WHITESPACE_PATTERN.replace_all(s, "")
}

/// Keeps only ASCII digits. Returns the input borrowed if it already
/// consists of digits only.
pub fn retain_ascii_digits(s: &str) -> Cow<'_, str> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(char::is_ascii_digit).collect())
    }
}
