//! Property-based tests for reference resolution and rewriting.

#[cfg(test)]
mod proptest_tests {
    use crate::link::LinkTarget;
    use crate::repository::RepositoryContext;
    use crate::resolver::find_line;
    use crate::rewrite::rewrite_document;
    use proptest::prelude::*;

    proptest! {
        /// Property: a term always finds the line it was copied from
        #[test]
        fn find_line_finds_literal_term(
            before in prop::collection::vec("[a-z ]{0,12}", 0..5),
            term in "[a-z.()*+?\\[\\]{}|^$\\\\]{1,8}",
        ) {
            let mut lines: Vec<String> = before
                .into_iter()
                .filter(|l| !l.contains(&term))
                .collect();
            let expected = lines.len() + 1;
            lines.push(format!("x {term} y"));
            let content = lines.join("\n");
            prop_assert_eq!(find_line(&content, &term).unwrap(), Some(expected));
        }

        /// Property: text without '<' is returned byte for byte
        #[test]
        fn rewrite_without_references_is_identity(text in "[^<]*") {
            let ctx = RepositoryContext::new("/nonexistent", "abc12345", LinkTarget::default());
            let rewrite = rewrite_document(&ctx, &text);
            prop_assert_eq!(rewrite.content, text);
            prop_assert!(rewrite.failures.is_empty());
        }
    }
}
