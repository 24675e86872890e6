//! Procedural macros for the aoc25-solver framework

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{Attribute, DeriveInput, Lit, LitInt, parse_macro_input};

/// Derive the `DaySolver` impl from a set of `PartSolver<N>` impls
///
/// # Attributes
///
/// - `parts`: Required. Number of parts; part `n` dispatches to `PartSolver<n>`.
///
/// # Example
///
/// ```ignore
/// use aoc25_solver::{DayParser, DaySolver, PartSolver};
///
/// #[derive(DaySolver)]
/// #[day_solver(parts = 2)]
/// struct Solver;
///
/// impl DayParser for Solver { /* ... */ }
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
///
/// A missing `PartSolver<n>` for some `n <= parts` is a compile error at the
/// derive site.
#[proc_macro_derive(DaySolver, attributes(day_solver))]
pub fn derive_day_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_day_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_day_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let attr = find_attr(input, "day_solver")?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: LitInt = meta.value()?.parse()?;
            parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported property, expected `parts`"))
        }
    })?;

    let parts = match parts {
        Some(0) => return Err(syn::Error::new_spanned(attr, "`parts` must be at least 1")),
        Some(parts) => parts,
        None => return Err(syn::Error::new_spanned(attr, "missing `parts = N`")),
    };

    let arms = (1..=parts).map(|n| {
        let n = Literal::u8_unsuffixed(n);
        quote! {
            #n => <Self as ::aoc25_solver::PartSolver<#n>>::solve(input),
        }
    });
    let parts = Literal::u8_unsuffixed(parts);

    Ok(quote! {
        impl #impl_generics ::aoc25_solver::DaySolver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                input: &mut <Self as ::aoc25_solver::DayParser>::Input<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc25_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc25_solver::SolveError::PartOutOfRange(part)),
                }
            }
        }
    })
}

/// Derive macro for registering a day with the plugin system
///
/// # Attributes
///
/// - `day`: Required. The puzzle day (1-25)
/// - `tags`: Optional. String literals used by the CLI's tag filter
///
/// # Requirements
///
/// The type must be a unit struct implementing `DaySolver`. Otherwise the
/// generated bound check fails at compile time:
///
/// ```text
/// error[E0277]: the trait bound `YourDay: DaySolver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// #[derive(DaySolver, AutoRegister)]
/// #[day_solver(parts = 2)]
/// #[aoc(day = 11, tags = ["graph", "dp"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegister, attributes(aoc))]
pub fn derive_auto_register(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = find_attr(input, "aoc")?;

    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            day = Some(value.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit) => tags.push(lit.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported property, expected `day` or `tags`"));
        }
        Ok(())
    })?;

    let day = match day {
        Some(day @ 1..=25) => Literal::u8_unsuffixed(day),
        Some(_) => return Err(syn::Error::new_spanned(attr, "`day` must be within 1..=25")),
        None => return Err(syn::Error::new_spanned(attr, "missing `day = N`")),
    };

    Ok(quote! {
        const _: () = {
            trait MustImplementDaySolver: ::aoc25_solver::DaySolver {}
            impl MustImplementDaySolver for #name {}
        };

        ::aoc25_solver::inventory::submit! {
            ::aoc25_solver::DayPlugin {
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(input: &'a DeriveInput, ident: &str) -> syn::Result<&'a Attribute> {
    input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(ident))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                format!("missing #[{}(...)] attribute", ident),
            )
        })
}
