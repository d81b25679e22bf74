//! Provides process macros for the `stackfmt` library.

#![deny(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{TokenStreamExt, quote};
use syn::{
    Data, DeriveInput, Error, Fields, Ident, Index, parse_macro_input, parse_quote,
    spanned::Spanned,
};

extern crate proc_macro;

macro_rules! error {
    ($tokens:expr, $msg:expr) => {
        Error::new($tokens.span(), $msg).to_compile_error()
    };
    ($tokens:expr, $fmt:expr, $($args:expr),*) => {
        error!($tokens, format!($fmt, $($args),*))
    };
}

/// Derives `stackfmt::worst::WorstCase` together with the rendering it
/// describes.
///
/// Structs render as their fields concatenated in declaration order, so the
/// worst case sets every field to its own worst value and the maximum length
/// is the field sum. Enums must be fieldless; they render as the variant
/// name, and the worst case is the variant with the longest name, ties going
/// to the first declared.
///
/// The derive emits the `Display` implementation itself. A type carrying a
/// hand-written `Display` fails to compile with conflicting implementations,
/// since a custom rendering has no derivable worst case.
#[proc_macro_derive(WorstCase)]
pub fn worst_case(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    // Collect errors to notify as many as possible at once.
    let mut errors = TokenStream2::new();

    let (worst, max_len, display, field_tys) = match &input.data {
        Data::Struct(data) => {
            let mut worst_fields = Vec::new();
            let mut len_terms = Vec::new();
            let mut display_stmts = Vec::new();
            let mut field_tys = Vec::new();
            for (index, field) in data.fields.iter().enumerate() {
                let ty = &field.ty;
                len_terms.push(quote!(<#ty as ::stackfmt::worst::WorstCase>::MAX_LEN));
                field_tys.push(field.ty.clone());
                match &field.ident {
                    Some(ident) => {
                        worst_fields
                            .push(quote!(#ident: <#ty as ::stackfmt::worst::WorstCase>::WORST));
                        display_stmts.push(quote!(::core::fmt::Display::fmt(&self.#ident, f)?;));
                    }
                    None => {
                        let index = Index::from(index);
                        worst_fields.push(quote!(<#ty as ::stackfmt::worst::WorstCase>::WORST));
                        display_stmts.push(quote!(::core::fmt::Display::fmt(&self.#index, f)?;));
                    }
                }
            }

            let worst = match &data.fields {
                Fields::Named(_) => quote!(Self { #(#worst_fields,)* }),
                Fields::Unnamed(_) => quote!(Self(#(#worst_fields),*)),
                Fields::Unit => quote!(Self),
            };
            let max_len = quote!(0 #(+ #len_terms)*);
            let display = quote!(#(#display_stmts)* Ok(()));
            (worst, max_len, display, field_tys)
        }
        Data::Enum(data) => {
            if data.variants.is_empty() {
                errors.append_all(error!(
                    name,
                    "an empty enum has no values, so no worst-case value"
                ));
            }
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    errors.append_all(error!(
                        variant,
                        "variants with fields are not supported; \
                         their rendered length has no derivable bound"
                    ));
                }
            }
            if !errors.is_empty() {
                return errors.into();
            }

            // The longest tag renders longest; ties go to the first declared.
            let mut longest: Option<(&Ident, usize)> = None;
            for variant in &data.variants {
                let len = variant.ident.to_string().len();
                if longest.map_or(true, |(_, best)| len > best) {
                    longest = Some((&variant.ident, len));
                }
            }
            let (longest, len) = longest.unwrap();

            let arms = data.variants.iter().map(|variant| {
                let ident = &variant.ident;
                let tag = ident.to_string();
                quote!(Self::#ident => f.write_str(#tag),)
            });
            let display = quote!(match self { #(#arms)* });
            (quote!(Self::#longest), quote!(#len), display, Vec::new())
        }
        Data::Union(data) => {
            errors.append_all(error!(
                data.union_token,
                "unions have no default rendering, so no derivable worst case"
            ));
            return errors.into();
        }
    };

    // Every field type must bring its own worst case along.
    let mut generics = input.generics.clone();
    for ty in &field_tys {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ty: ::stackfmt::worst::WorstCase));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #display
            }
        }

        impl #impl_generics ::stackfmt::worst::WorstCase for #name #ty_generics #where_clause {
            const WORST: Self = #worst;
            const MAX_LEN: usize = #max_len;
        }
    };
    expanded.into()
}
