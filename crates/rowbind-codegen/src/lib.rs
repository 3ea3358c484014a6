// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Struct-level `#[mapped(...)]` options.
#[derive(Default)]
struct StructOpts {
    /// `#[mapped(value)]`: value semantics, blank instances come from `Default`.
    value: bool,
    /// `#[mapped(no_default)]`: no parameterless constructor exists.
    no_default: bool,
    /// `#[mapped(factory = "path")]`: creation-function override, `fn() -> Self`.
    factory: Option<syn::Path>,
}

impl StructOpts {
    fn parse(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut opts = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("mapped") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("value") {
                    opts.value = true;
                    Ok(())
                } else if meta.path.is_ident("no_default") {
                    opts.no_default = true;
                    Ok(())
                } else if meta.path.is_ident("factory") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    opts.factory = Some(lit.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `value`, `no_default` or `factory = \"...\"`"))
                }
            })?;
        }

        if opts.value && opts.no_default {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "`value` and `no_default` are mutually exclusive",
            ));
        }

        Ok(opts)
    }
}

/// Field-level `#[mapped(...)]` options.
#[derive(Default)]
struct FieldOpts {
    /// `#[mapped(skip)]`: field is not mapped at all.
    skip: bool,
    /// `#[mapped(readonly)]`: getter only, no setter.
    readonly: bool,
}

impl FieldOpts {
    fn parse(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut opts = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("mapped") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    opts.skip = true;
                    Ok(())
                } else if meta.path.is_ident("readonly") {
                    opts.readonly = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `readonly`"))
                }
            })?;
        }

        Ok(opts)
    }
}

/// `#[derive(Mapped)]` macro: generates the `rowbind::Mapped` impl for a
/// named-field struct, so the type can be described to the descriptor
/// registry without hand-written accessor functions.
///
/// Every non-skipped field becomes one mapped member in declaration order.
/// Generated getters clone the field value; generated setters move the
/// incoming value in. Field types therefore must be `Clone + 'static`.
///
/// Struct attributes:
/// - `#[mapped(value)]` — value semantics; blank instances are `Default::default()`
/// - `#[mapped(no_default)]` — the type has no parameterless constructor
/// - `#[mapped(factory = "path::to::fn")]` — creation override, `fn() -> Self`
///
/// Field attributes:
/// - `#[mapped(skip)]` — exclude the field
/// - `#[mapped(readonly)]` — expose a getter only
///
/// Example:
/// ```ignore
/// use rowbind::Mapped;
///
/// #[derive(Default, Mapped)]
/// struct Person {
///     name: String,
///     age: u32,
///     #[mapped(skip)]
///     scratch: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Mapped, attributes(mapped))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let type_name = name.to_string();

    if let Some(param) = input.generics.params.iter().next() {
        return syn::Error::new_spanned(param, "generic types are not supported")
            .to_compile_error()
            .into();
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return syn::Error::new_spanned(&input, "Only named fields are supported")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Only structs are supported")
                .to_compile_error()
                .into()
        }
    };

    let opts = match StructOpts::parse(&input.attrs) {
        Ok(o) => o,
        Err(e) => return e.to_compile_error().into(),
    };

    // Shape: value semantics, declared no-constructor, or Default-backed ctor.
    let shape_call = if opts.value {
        quote! {
            .value_default((|| ::std::boxed::Box::new(
                <#name as ::core::default::Default>::default()
            ) as ::std::boxed::Box<dyn ::core::any::Any>) as ::rowbind::CreateFn)
        }
    } else if opts.no_default {
        quote! {}
    } else {
        quote! {
            .ctor((|| ::std::boxed::Box::new(
                <#name as ::core::default::Default>::default()
            ) as ::std::boxed::Box<dyn ::core::any::Any>) as ::rowbind::CreateFn)
        }
    };

    let factory_call = match &opts.factory {
        Some(path) => quote! {
            .factory(|| ::std::boxed::Box::new(#path())
                as ::std::boxed::Box<dyn ::core::any::Any>)
        },
        None => quote! {},
    };

    // One `.field::<F>(...)` call per mapped field, declaration order.
    let mut field_calls = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return syn::Error::new_spanned(field, "Field must have a name")
                .to_compile_error()
                .into();
        };

        let field_opts = match FieldOpts::parse(&field.attrs) {
            Ok(o) => o,
            Err(e) => return e.to_compile_error().into(),
        };
        if field_opts.skip {
            continue;
        }

        let field_ty = &field.ty;
        let name_str = field_name.to_string();

        let getter = quote! {
            ::core::option::Option::Some(
                (|instance: &dyn ::core::any::Any|
                    -> ::core::result::Result<
                        ::std::boxed::Box<dyn ::core::any::Any>,
                        ::rowbind::AccessError,
                    >
                {
                    let owner = ::rowbind::accessor::owner_ref::<#name>(#name_str, instance)?;
                    ::core::result::Result::Ok(::std::boxed::Box::new(
                        ::core::clone::Clone::clone(&owner.#field_name)
                    ) as ::std::boxed::Box<dyn ::core::any::Any>)
                }) as ::rowbind::GetFn,
            )
        };

        let setter = if field_opts.readonly {
            quote! { ::core::option::Option::None }
        } else {
            quote! {
                ::core::option::Option::Some(
                    (|instance: &mut dyn ::core::any::Any,
                      value: ::std::boxed::Box<dyn ::core::any::Any>|
                        -> ::core::result::Result<(), ::rowbind::AccessError>
                    {
                        let owner =
                            ::rowbind::accessor::owner_mut::<#name>(#name_str, instance)?;
                        owner.#field_name =
                            ::rowbind::accessor::value_of::<#field_ty>(#name_str, value)?;
                        ::core::result::Result::Ok(())
                    }) as ::rowbind::SetFn,
                )
            }
        };

        field_calls.push(quote! {
            .field::<#field_ty>(#name_str, #getter, #setter)
        });
    }

    let expanded = quote! {
        impl ::rowbind::Mapped for #name {
            fn type_info() -> ::rowbind::TypeInfo {
                ::rowbind::TypeInfo::new::<#name>(#type_name)
                    #shape_call
                    #factory_call
                    #(#field_calls)*
            }
        }
    };

    expanded.into()
}
