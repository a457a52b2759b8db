mod sort_key;

use proc_macro::TokenStream;

/// Derive macro implementing `queryable_rust::SortKey` for an enum of
/// sortable attributes.
///
/// Each variant maps to its snake_cased name unless overridden:
/// ```ignore
/// #[derive(Clone, Copy, SortKey)]
/// enum TrackKey {
///     Title,                          // "title"
///     ReleaseYear,                    // "release_year"
///     #[sort_key(rename = "plays")]
///     PlayCount,                      // "plays"
/// }
/// ```
///
/// Only unit variants are accepted: a sort key is a closed set of attribute
/// names, not a carrier of data.
#[proc_macro_derive(SortKey, attributes(sort_key))]
pub fn derive_sort_key(input: TokenStream) -> TokenStream {
    sort_key::derive_sort_key(input)
}
