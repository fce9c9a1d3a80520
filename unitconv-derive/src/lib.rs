//! Derive macro implementation used by `unitconv-core`.
//!
//! `unitconv-derive` is an implementation detail of this workspace. The `Domain` derive expands in terms of
//! `crate::Domain`, `crate::SymbolTable` and friends, so it is intended to be used by `unitconv-core` (or by crates
//! that expose an identical crate-root API).
//!
//! Most users should depend on `unitconv` instead and use the predefined domains.
//!
//! # Generated impls
//!
//! For a unit enum `Speed`, the derive implements:
//!
//! - `crate::Domain for Speed` (closed unit list, alias table, canonical symbols, lazily built symbol table)
//! - `crate::RatioDomain` and `crate::Convert` for `Speed` when every variant carries a `scale`
//! - `core::fmt::Display` (canonical symbol), `core::str::FromStr` (exact alias match) and `TryFrom<u8>`
//! - `serde::Serialize` / `serde::Deserialize`, gated behind the calling crate's `serde` feature
//!
//! # Attributes
//!
//! Every variant needs a `#[unit(...)]` attribute:
//!
//! - `symbol = "km/h"`: canonical output symbol, must also be listed in `aliases`
//! - `aliases = ["k/h", "km/h", "kph"]`: input symbols resolving to this unit
//! - `scale = 0.2777778`: optional, magnitude of one unit in the domain's base unit
//!
//! `scale` is all-or-nothing: either every variant has one (multiplicative domain) or none does and the domain
//! provides its own `Convert` impl.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive the domain descriptor impls for a closed unit enum.
///
/// Each variant must be paired with a `#[unit(...)]` attribute providing `symbol` and `aliases`, and optionally
/// `scale`.
///
/// This macro is intended for use by `unitconv-core`.
#[proc_macro_derive(Domain, attributes(unit))]
pub fn derive_domain(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_domain_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// One parsed enum variant.
struct UnitVariant {
    ident: Ident,
    attr: UnitAttribute,
}

fn derive_domain_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let variants = collect_variants(&input)?;

    if variants.len() > usize::from(u8::MAX) {
        return Err(syn::Error::new_spanned(
            name,
            "a domain can hold at most 255 units",
        ));
    }

    check_aliases(&variants)?;
    let with_scale = check_scales(name, &variants)?;

    let idents: Vec<&Ident> = variants.iter().map(|v| &v.ident).collect();
    let symbols: Vec<&LitStr> = variants.iter().map(|v| &v.attr.symbol).collect();
    let indices: Vec<u8> = (0..variants.len())
        .map(|i| u8::try_from(i).unwrap_or(u8::MAX))
        .collect();

    let alias_pairs = variants.iter().flat_map(|v| {
        let ident = &v.ident;
        v.attr.aliases.iter().map(move |alias| quote! { (#alias, #name::#ident) })
    });

    let domain_impl = quote! {
        impl crate::Domain for #name {
            const KIND: crate::DomainKind = crate::DomainKind::#name;
            const ALL: &'static [Self] = &[#(#name::#idents),*];
            const ALIASES: &'static [(&'static str, Self)] = &[#(#alias_pairs),*];

            #[inline]
            fn symbol(self) -> &'static str {
                match self {
                    #(#name::#idents => #symbols,)*
                }
            }

            #[inline]
            fn index(self) -> u8 {
                match self {
                    #(#name::#idents => #indices,)*
                }
            }

            fn symbol_table() -> &'static crate::SymbolTable<Self> {
                static TABLE: ::once_cell::sync::Lazy<crate::SymbolTable<#name>> =
                    ::once_cell::sync::Lazy::new(|| {
                        crate::SymbolTable::from_pairs(
                            <#name as crate::Domain>::KIND,
                            <#name as crate::Domain>::ALIASES,
                        )
                    });
                &TABLE
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(<#name as crate::Domain>::symbol(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::ConversionError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <#name as crate::Domain>::try_guess_unit(s).ok_or_else(|| {
                    crate::ConversionError::UnresolvedSymbol {
                        domain: <#name as crate::Domain>::KIND,
                        symbol: s.to_owned(),
                    }
                })
            }
        }

        impl ::core::convert::TryFrom<u8> for #name {
            type Error = crate::ConversionError;

            fn try_from(index: u8) -> ::core::result::Result<Self, Self::Error> {
                match index {
                    #(#indices => Ok(#name::#idents),)*
                    _ => Err(crate::ConversionError::InvalidUnitIndex {
                        domain: <#name as crate::Domain>::KIND,
                        index,
                    }),
                }
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(<#name as crate::Domain>::symbol(*self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let symbol = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <#name as crate::Domain>::try_guess_unit(&symbol).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(crate::ConversionError::UnresolvedSymbol {
                        domain: <#name as crate::Domain>::KIND,
                        symbol,
                    })
                })
            }
        }
    };

    let ratio_impl = if with_scale {
        let scales: Vec<&Expr> = variants
            .iter()
            .filter_map(|v| v.attr.scale.as_ref())
            .collect();
        let assertions = variants.iter().filter_map(|v| {
            let scale = v.attr.scale.as_ref()?;
            let msg = LitStr::new(
                &format!("scale of {}::{} must be positive", name, v.ident),
                v.ident.span(),
            );
            Some(quote! {
                const _: () = assert!((#scale) > 0.0, #msg);
            })
        });

        quote! {
            impl crate::RatioDomain for #name {
                #[inline]
                fn scale(self) -> crate::Scalar {
                    match self {
                        #(#name::#idents => #scales,)*
                    }
                }
            }

            impl crate::Convert for #name {
                #[inline]
                fn convert(value: crate::Scalar, from: Self, to: Self) -> crate::Scalar {
                    crate::rules::ratio(value, from, to)
                }
            }

            #(#assertions)*
        }
    } else {
        TokenStream2::new()
    };

    Ok(quote! {
        #domain_impl
        #ratio_impl
    })
}

fn collect_variants(input: &DeriveInput) -> syn::Result<Vec<UnitVariant>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`Domain` can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "a domain needs at least one unit",
        ));
    }

    data.variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "domain units must be fieldless variants",
                ));
            }
            if let Some((_, discriminant)) = &variant.discriminant {
                return Err(syn::Error::new_spanned(
                    discriminant,
                    "domain units take their index from declaration order",
                ));
            }
            let attr = parse_unit_attribute(&variant.attrs, &variant.ident)?;
            Ok(UnitVariant {
                ident: variant.ident.clone(),
                attr,
            })
        })
        .collect()
}

/// Aliases must be unique within the domain and include the canonical symbol.
fn check_aliases(variants: &[UnitVariant]) -> syn::Result<()> {
    let mut seen: HashMap<String, &Ident> = HashMap::new();

    for variant in variants {
        for alias in &variant.attr.aliases {
            if let Some(owner) = seen.insert(alias.value(), &variant.ident) {
                return Err(syn::Error::new(
                    alias.span(),
                    format!("alias `{}` is already used by `{}`", alias.value(), owner),
                ));
            }
        }

        let symbol = variant.attr.symbol.value();
        if !variant.attr.aliases.iter().any(|a| a.value() == symbol) {
            return Err(syn::Error::new(
                variant.attr.symbol.span(),
                format!("canonical symbol `{}` must also be listed in `aliases`", symbol),
            ));
        }
    }

    Ok(())
}

/// Returns whether the domain is multiplicative (every variant has a scale).
fn check_scales(name: &Ident, variants: &[UnitVariant]) -> syn::Result<bool> {
    let scaled = variants.iter().filter(|v| v.attr.scale.is_some()).count();

    match scaled {
        0 => Ok(false),
        n if n == variants.len() => Ok(true),
        _ => Err(syn::Error::new_spanned(
            name,
            "either every unit declares a `scale` or none does",
        )),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    aliases: Vec<LitStr>,
    scale: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut aliases: Option<Vec<LitStr>> = None;
        let mut scale: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "aliases" => {
                    let content;
                    bracketed!(content in input);
                    let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    aliases = Some(list.into_iter().collect());
                }
                "scale" => {
                    scale = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let aliases = aliases
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `aliases`"))?;

        Ok(UnitAttribute {
            symbol,
            aliases,
            scale,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute], variant: &Ident) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        variant.span(),
        format!("missing #[unit(...)] attribute on `{}`", variant),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn parses_complete_attribute() {
        let tokens = quote! {
            symbol = "km/h", aliases = ["k/h", "km/h", "kph"], scale = 0.2777778
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km/h");
        assert_eq!(attr.aliases.len(), 3);
        assert!(attr.scale.is_some());
    }

    #[test]
    fn scale_is_optional() {
        let tokens = quote! { symbol = "K", aliases = ["k", "K"] };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.scale.is_none());
    }

    #[test]
    fn accepts_trailing_commas() {
        let tokens = quote! { symbol = "m", aliases = ["m",], scale = 1.0, };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.aliases[0].value(), "m");
    }

    #[test]
    fn missing_symbol_is_rejected() {
        let tokens = quote! { aliases = ["m"], scale = 1.0 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn missing_aliases_is_rejected() {
        let tokens = quote! { symbol = "m", scale = 1.0 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `aliases`"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let tokens = quote! { symbol = "m", aliases = ["m"], ratio = 1.0 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `ratio`"));
    }

    #[test]
    fn missing_unit_attribute_names_the_variant() {
        let input: DeriveInput = parse_quote! {
            pub enum Time {
                Second,
            }
        };
        let err = derive_domain_impl(input).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute on `Second`"));
    }

    #[test]
    fn structs_are_rejected() {
        let input: DeriveInput = parse_quote! {
            pub struct Time;
        };
        let err = derive_domain_impl(input).err().unwrap();
        assert!(err.to_string().contains("only be derived for enums"));
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        let input: DeriveInput = parse_quote! {
            pub enum Volume {
                #[unit(symbol = "in3", aliases = ["in3"], scale = 0.000016387064)]
                CubicInch,
                #[unit(symbol = "ft3", aliases = ["ft3", "in3"], scale = 0.028316846592)]
                CubicFoot,
            }
        };
        let err = derive_domain_impl(input).err().unwrap();
        assert!(err.to_string().contains("alias `in3` is already used by `CubicInch`"));
    }

    #[test]
    fn canonical_symbol_must_be_an_alias() {
        let input: DeriveInput = parse_quote! {
            pub enum Temperature {
                #[unit(symbol = "C", aliases = ["c", "celsius"])]
                Celsius,
            }
        };
        let err = derive_domain_impl(input).err().unwrap();
        assert!(err.to_string().contains("canonical symbol `C`"));
    }

    #[test]
    fn partial_scales_are_rejected() {
        let input: DeriveInput = parse_quote! {
            pub enum Time {
                #[unit(symbol = "s", aliases = ["s"], scale = 1.0)]
                Second,
                #[unit(symbol = "m", aliases = ["m"])]
                Minute,
            }
        };
        let err = derive_domain_impl(input).err().unwrap();
        assert!(err.to_string().contains("every unit declares a `scale`"));
    }

    #[test]
    fn ratio_domain_expands_convert() {
        let input: DeriveInput = parse_quote! {
            pub enum Time {
                #[unit(symbol = "s", aliases = ["s", "sec"], scale = 1.0)]
                Second,
                #[unit(symbol = "m", aliases = ["m", "min"], scale = 60.0)]
                Minute,
            }
        };
        let code = derive_domain_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Domain for Time"));
        assert!(code.contains("impl crate :: RatioDomain for Time"));
        assert!(code.contains("impl crate :: Convert for Time"));
        assert!(code.contains("(\"min\" , Time :: Minute)"));
        assert!(code.contains("Time :: Minute => 60.0"));
    }

    #[test]
    fn affine_domain_leaves_convert_to_the_caller() {
        let input: DeriveInput = parse_quote! {
            pub enum Temperature {
                #[unit(symbol = "K", aliases = ["k", "K"])]
                Kelvin,
            }
        };
        let code = derive_domain_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Domain for Temperature"));
        assert!(!code.contains("RatioDomain"));
        assert!(!code.contains("impl crate :: Convert"));
    }

    #[test]
    fn explicit_discriminants_are_rejected() {
        let input: DeriveInput = parse_quote! {
            pub enum Time {
                #[unit(symbol = "s", aliases = ["s"], scale = 1.0)]
                Second = 3,
            }
        };
        assert!(derive_domain_impl(input).is_err());
    }
}
