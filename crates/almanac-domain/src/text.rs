// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! String normalization helpers backing the contact value objects.

/// Keeps only the ASCII decimal digits of `input`, in order.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::text::digits;
///
/// assert_eq!(digits("+7 (123) 456-78-90"), "71234567890");
/// assert_eq!(digits("no digits"), "");
/// ```
pub fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strips every character that cannot appear in a plain email address,
/// keeping ASCII alphanumerics and `.`, `_`, `-`, `@`.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::text::strip_email_noise;
///
/// assert_eq!(strip_email_noise("<user.name@host.org>"), "user.name@host.org");
/// ```
pub fn strip_email_noise(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '@'))
        .collect()
}

/// Reduces a phone number to its local subscriber form: the last ten digits,
/// or everything that is left when fewer than ten remain.
///
/// # Examples
///
/// ```rust
/// # use almanac_domain::text::local_phone;
///
/// assert_eq!(local_phone("+7 (123) 456-78-90"), "1234567890");
/// assert_eq!(local_phone("555-0199"), "5550199");
/// ```
pub fn local_phone(input: &str) -> String {
    let all = digits(input);
    if all.len() >= 10 {
        all[all.len() - 10..].to_string()
    } else {
        all
    }
}
