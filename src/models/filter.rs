use super::post::Post;
use crate::utils::text::fold_case;

/// Case-insensitive substring match, the same test the post filter applies.
pub fn content_matches(content: &str, term: &str) -> bool {
    term.is_empty() || fold_case(content).contains(&fold_case(term))
}

/// Posts whose content contains `term`, ignoring case, in their original
/// order. An empty term keeps everything.
pub fn filter_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| content_matches(&post.content, term))
        .collect()
}
