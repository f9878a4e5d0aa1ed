// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Derive macro for `cruise-control-params`
//!
//! `#[derive(Params)]` implements `EncodeParams` for a type:
//! - structs are encoded field by field, using the `#[param("key,flags")]`
//!   annotation of each field; fields without annotation are merged into the
//!   enclosing map. A `ParamFields` impl exposing the field table is
//!   generated too.
//! - `#[params(display)]` encodes the value as one scalar rendered with
//!   `Display`, the `Default` value counting as empty.
//! - `#[params(marshal)]` delegates to the type's `MarshalParams` impl.
//!
//! Annotations are parsed while expanding the macro, so a malformed one is a
//! compile error pointing at the offending field.
//!
//! # Example
//! ```ignore
//! #[derive(Params)]
//! pub struct RemoveBrokerRequest {
//!     pub common: GenericRequestWithReason,
//!     #[param("brokerid")]
//!     pub broker_ids: Vec<i32>,
//!     #[param("dryrun,omitempty")]
//!     pub dry_run: bool,
//! }
//! ```

use cruise_control_params::FieldDescriptor;
use darling::{FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{DeriveInput, LitStr, parse_macro_input, parse_quote};

/// Field attributes; `#[param(...)]` is forwarded and parsed by hand since it
/// takes a bare string literal.
#[derive(Debug, FromField)]
#[darling(forward_attrs(param))]
struct ParamFieldArgs {
    ident: Option<syn::Ident>,
    attrs: Vec<syn::Attribute>,
}

/// Container attributes for Params derive
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(params))]
struct ParamsContainerArgs {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<(), ParamFieldArgs>,
    /// Encode as a single scalar through `Display`.
    #[darling(default)]
    display: bool,
    /// Encode through the type's `MarshalParams` impl.
    #[darling(default)]
    marshal: bool,
}

/// A resolved struct field.
struct FieldSpec {
    name: String,
    access: TokenStream2,
    descriptor: FieldDescriptor,
}

/// Derive `EncodeParams` (and `ParamFields` for structs).
///
/// # Example
/// ```ignore
/// #[derive(Params)]
/// pub struct UserTasksRequest {
///     #[param("user_task_ids,omitempty")]
///     pub user_task_ids: Vec<String>,
///     #[param("-")]
///     pub note: String,
/// }
///
/// #[derive(Default, PartialEq, Params)]
/// #[params(display)]
/// pub enum Substate { #[default] Undefined, Executor }
/// ```
#[proc_macro_derive(Params, attributes(param, params))]
pub fn derive_params(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let args = match ParamsContainerArgs::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let expanded = match (args.display, args.marshal) {
        (true, true) => Err(darling::Error::custom(
            "`display` and `marshal` cannot be combined",
        )
        .with_span(&args.ident)),
        (true, false) => Ok(expand_scalar(&args, quote!(encode_display))),
        (false, true) => Ok(expand_scalar(&args, quote!(encode_marshaled))),
        (false, false) => expand_struct(&args),
    };

    match expanded {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}

/// Impl delegating the whole value to one of the core adapters.
fn expand_scalar(args: &ParamsContainerArgs, adapter: TokenStream2) -> TokenStream2 {
    let ident = &args.ident;
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    quote! {
        impl #impl_generics ::cruise_control_params::EncodeParams for #ident #ty_generics #where_clause {
            fn encode_params(
                &self,
                state: &mut ::cruise_control_params::EncoderState,
                options: ::cruise_control_params::EncodeOptions<'_>,
            ) -> ::cruise_control_params::Result<()> {
                ::cruise_control_params::#adapter(self, state, options)
            }
        }
    }
}

fn expand_struct(args: &ParamsContainerArgs) -> darling::Result<TokenStream2> {
    let ident = &args.ident;
    let fields = match &args.data {
        darling::ast::Data::Struct(fields) => &fields.fields,
        darling::ast::Data::Enum(_) => {
            return Err(darling::Error::custom(
                "Params can only be derived for enums with #[params(display)] or #[params(marshal)]",
            )
            .with_span(ident));
        }
    };

    let mut errors = darling::Error::accumulator();
    let specs: Vec<FieldSpec> = fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| errors.handle(field_spec(index, field)))
        .collect();
    errors.finish()?;

    let descriptors = specs.iter().map(|spec| {
        let name = &spec.name;
        let descriptor = descriptor_tokens(&spec.descriptor);
        quote! { ::cruise_control_params::Field::new(#name, #descriptor) }
    });

    let encodes: Vec<_> = specs
        .iter()
        .enumerate()
        .filter(|(_, spec)| !spec.descriptor.is_skipped())
        .map(|(index, spec)| {
            let access = &spec.access;
            quote! { fields[#index].encode(&self.#access, state)?; }
        })
        .collect();
    let body = if encodes.is_empty() {
        quote! { ::cruise_control_params::encode_struct(state, |_| Ok(())) }
    } else {
        quote! {
            let fields = <Self as ::cruise_control_params::ParamFields>::FIELDS;
            ::cruise_control_params::encode_struct(state, |state| {
                #(#encodes)*
                Ok(())
            })
        }
    };

    // Every type parameter must itself be encodable.
    let mut encode_generics = args.generics.clone();
    let type_params: Vec<syn::Ident> = encode_generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    {
        let where_clause = encode_generics.make_where_clause();
        for param in &type_params {
            where_clause
                .predicates
                .push(parse_quote!(#param: ::cruise_control_params::EncodeParams));
        }
    }

    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();
    let (encode_impl_generics, _, encode_where_clause) = encode_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::cruise_control_params::ParamFields for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::cruise_control_params::Field] = &[#(#descriptors),*];
        }

        impl #encode_impl_generics ::cruise_control_params::EncodeParams for #ident #ty_generics #encode_where_clause {
            fn encode_params(
                &self,
                state: &mut ::cruise_control_params::EncoderState,
                _options: ::cruise_control_params::EncodeOptions<'_>,
            ) -> ::cruise_control_params::Result<()> {
                #body
            }
        }
    })
}

fn field_spec(index: usize, field: &ParamFieldArgs) -> darling::Result<FieldSpec> {
    let (name, access) = match &field.ident {
        Some(ident) => (ident.to_string(), ident.to_token_stream()),
        None => (index.to_string(), syn::Index::from(index).to_token_stream()),
    };

    let mut annotations = field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("param"));

    let descriptor = match (annotations.next(), annotations.next()) {
        (None, _) => FieldDescriptor::EMBEDDED,
        (Some(_), Some(extra)) => {
            return Err(darling::Error::custom("duplicate #[param] annotation").with_span(extra));
        }
        (Some(attr), None) => {
            let lit: LitStr = attr.parse_args().map_err(darling::Error::from)?;
            FieldDescriptor::parse(&lit.value()).map_err(|e| {
                darling::Error::custom(format!(
                    "invalid param annotation on field `{name}`: {e}"
                ))
                .with_span(&lit)
            })?
        }
    };

    Ok(FieldSpec {
        name,
        access,
        descriptor,
    })
}

fn descriptor_tokens(descriptor: &FieldDescriptor) -> TokenStream2 {
    if descriptor.is_skipped() {
        return quote! { ::cruise_control_params::FieldDescriptor::SKIPPED };
    }
    if *descriptor == FieldDescriptor::EMBEDDED {
        return quote! { ::cruise_control_params::FieldDescriptor::EMBEDDED };
    }
    let key = descriptor.key.as_ref();
    let omit_empty = descriptor.omit_empty;
    quote! { ::cruise_control_params::FieldDescriptor::new(#key, #omit_empty) }
}
