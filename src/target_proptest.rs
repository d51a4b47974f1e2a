//! Property-based tests for clone directory derivation.
//!
//! These tests use proptest to generate random URLs and verify that the
//! derived directory behaves like the one `git clone` creates.

#[cfg(test)]
mod proptest_tests {
    use crate::target::derive_directory;
    use proptest::prelude::*;

    proptest! {
        /// Property: `<base>/<name>.git` always derives `<name>`
        #[test]
        fn derive_strips_host_and_suffix(
            host in "[a-z]{1,12}\\.(com|org|io)",
            org in "[a-zA-Z0-9_-]{1,16}",
            name in "[a-zA-Z0-9_-]{1,24}",
        ) {
            let url = format!("https://{}/{}/{}.git", host, org, name);
            prop_assert_eq!(derive_directory(&url), name);
        }

        /// Property: the derived directory never contains a path separator
        #[test]
        fn derive_never_contains_slash(input in ".*") {
            let result = derive_directory(&input);
            prop_assert!(!result.contains('/'), "got '{}' from '{}'", result, input);
        }

        /// Property: exactly one trailing `.git` is removed
        #[test]
        fn derive_removes_exactly_one_suffix(name in "[a-z]{1,10}") {
            let single = format!("https://example.com/{}.git", name);
            let double = format!("https://example.com/{}.git.git", name);
            prop_assert_eq!(derive_directory(&single), name.clone());
            prop_assert_eq!(derive_directory(&double), format!("{}.git", name));
        }

        /// Property: plain names without separators pass through unchanged
        #[test]
        fn derive_preserves_plain_names(name in "[a-zA-Z0-9_-]{1,32}") {
            prop_assert_eq!(derive_directory(&name), name);
        }
    }
}
