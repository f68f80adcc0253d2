use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Data, DataEnum, DataStruct, DeriveInput, Fields, GenericParam, Generics, Ident, Index,
    Result, parse_quote,
};

use crate::attrs::{TypeFlags, parse_type_flags};

pub(crate) fn expand(input: DeriveInput) -> Result<TokenStream> {
    let flags = parse_type_flags(&input.attrs)?;

    for param in &input.generics.params {
        match param {
            GenericParam::Type(_) => {}
            GenericParam::Lifetime(param) => {
                return Err(syn::Error::new_spanned(
                    param,
                    "`Remold` targets cannot carry lifetime parameters",
                ));
            }
            GenericParam::Const(param) => {
                return Err(syn::Error::new_spanned(
                    param,
                    "`Remold` targets cannot carry const parameters",
                ));
            }
        }
    }

    if flags.custom {
        return Ok(emit_typed(
            &input,
            TokenStream::new(),
            quote! {
                remold_reflect::info::TypeInfo::Custom(
                    remold_reflect::info::CustomInfo::new::<Self>(),
                )
            },
        ));
    }

    match &input.data {
        Data::Struct(data) => expand_struct(&input, data, flags),
        Data::Enum(data) => expand_enum(&input, data),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "`Remold` cannot be derived for unions",
        )),
    }
}

/// Adds a `Typed` bound to every type parameter.
fn typed_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(remold_reflect::info::Typed));
        }
    }
    generics
}

fn expand_struct(input: &DeriveInput, data: &DataStruct, flags: TypeFlags) -> Result<TokenStream> {
    match &data.fields {
        Fields::Named(fields) if flags.default => {
            expand_object(input, fields.named.iter().collect())
        }
        Fields::Named(fields) => expand_record(input, fields.named.iter().collect()),
        Fields::Unnamed(_) if flags.default => Err(syn::Error::new_spanned(
            &input.ident,
            "`#[remold(default)]` requires named fields",
        )),
        Fields::Unnamed(fields) => expand_tuple(input, fields.unnamed.iter().collect()),
        Fields::Unit => expand_unit(input),
    }
}

/// The record path: deserialize every declared field into the bag, then
/// construct the whole value at once.
fn expand_record(input: &DeriveInput, fields: Vec<&syn::Field>) -> Result<TokenStream> {
    let ident = &input.ident;
    let generics = typed_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let turbofish = ty_generics.as_turbofish();

    let idents: Vec<&Ident> = fields.iter().map(|f| f.ident.as_ref().unwrap()).collect();
    let names: Vec<String> = idents.iter().map(|i| i.to_string()).collect();
    let types: Vec<&syn::Type> = fields.iter().map(|f| &f.ty).collect();

    let helpers = quote! {
        fn __remold_construct #impl_generics (
            fields: &mut remold_reflect::ops::FieldBag,
        ) -> ::core::result::Result<
            ::std::boxed::Box<dyn ::core::any::Any>,
            remold_reflect::DeserializeError,
        >
        #where_clause
        {
            ::core::result::Result::Ok(::std::boxed::Box::new(#ident #turbofish {
                #( #idents: fields.take::<#types>(#names)?, )*
            }))
        }
    };

    let info = quote! {
        remold_reflect::info::TypeInfo::Struct(remold_reflect::info::StructInfo::new::<Self>(
            &[ #( remold_reflect::info::NamedField::new::<#types>(#names) ),* ],
            __remold_construct #turbofish,
        ))
    };

    Ok(emit_typed(input, helpers, info))
}

/// The plain-object path: instantiate with `Default`, then assign
/// discovered attributes one by one.
fn expand_object(input: &DeriveInput, fields: Vec<&syn::Field>) -> Result<TokenStream> {
    let ident = &input.ident;
    let generics = typed_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let turbofish = ty_generics.as_turbofish();

    // A generic helper needs `Self: Default` spelled out; the non-generic
    // case proves it at the `default()` call.
    let mut make_generics = generics.clone();
    if !input.generics.params.is_empty() {
        make_generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ident #ty_generics: ::core::default::Default));
    }
    let (make_impl_generics, _, make_where_clause) = make_generics.split_for_impl();

    let idents: Vec<&Ident> = fields.iter().map(|f| f.ident.as_ref().unwrap()).collect();
    let names: Vec<String> = idents.iter().map(|i| i.to_string()).collect();
    let types: Vec<&syn::Type> = fields.iter().map(|f| &f.ty).collect();

    let helpers = quote! {
        fn __remold_make #make_impl_generics () -> ::std::boxed::Box<dyn ::core::any::Any>
        #make_where_clause
        {
            ::std::boxed::Box::new(<#ident #ty_generics as ::core::default::Default>::default())
        }

        fn __remold_set #impl_generics (
            target: &mut dyn ::core::any::Any,
            name: &str,
            value: ::std::boxed::Box<dyn ::core::any::Any>,
        ) -> ::core::result::Result<(), remold_reflect::DeserializeError>
        #where_clause
        {
            let ::core::option::Option::Some(this) = target.downcast_mut::<#ident #ty_generics>()
            else {
                return ::core::result::Result::Err(remold_reflect::DeserializeError::message(
                    "object target has unexpected type",
                ));
            };
            match name {
                #(
                    #names => {
                        this.#idents =
                            remold_reflect::__macro_exports::take_value::<#types>(value, #names)?;
                    }
                )*
                other => {
                    return ::core::result::Result::Err(
                        remold_reflect::DeserializeError::message(::std::format!(
                            "unknown field `{other}`"
                        )),
                    );
                }
            }
            ::core::result::Result::Ok(())
        }
    };

    let info = quote! {
        remold_reflect::info::TypeInfo::Object(remold_reflect::info::ObjectInfo::new::<Self>(
            &[ #( remold_reflect::info::NamedField::new::<#types>(#names) ),* ],
            __remold_make #turbofish,
            __remold_set #turbofish,
        ))
    };

    Ok(emit_typed(input, helpers, info))
}

/// The named fixed-tuple path: spread the source positionally.
fn expand_tuple(input: &DeriveInput, fields: Vec<&syn::Field>) -> Result<TokenStream> {
    let ident = &input.ident;
    let generics = typed_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let turbofish = ty_generics.as_turbofish();

    let indices: Vec<Index> = (0..fields.len()).map(Index::from).collect();
    let positions: Vec<usize> = (0..fields.len()).collect();
    let types: Vec<&syn::Type> = fields.iter().map(|f| &f.ty).collect();

    let helpers = quote! {
        fn __remold_construct #impl_generics (
            elements: &mut remold_reflect::ops::ElementBag,
        ) -> ::core::result::Result<
            ::std::boxed::Box<dyn ::core::any::Any>,
            remold_reflect::DeserializeError,
        >
        #where_clause
        {
            ::core::result::Result::Ok(::std::boxed::Box::new(#ident #turbofish (
                #( elements.take_at::<#types>(#indices)?, )*
            )))
        }
    };

    let info = quote! {
        remold_reflect::info::TypeInfo::Tuple(remold_reflect::info::TupleInfo::named::<Self>(
            &[ #( remold_reflect::info::UnnamedField::new::<#types>(#positions) ),* ],
            __remold_construct #turbofish,
        ))
    };

    Ok(emit_typed(input, helpers, info))
}

/// A unit struct is a record with no fields.
fn expand_unit(input: &DeriveInput) -> Result<TokenStream> {
    let ident = &input.ident;
    let generics = typed_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let turbofish = ty_generics.as_turbofish();

    let helpers = quote! {
        fn __remold_construct #impl_generics (
            _fields: &mut remold_reflect::ops::FieldBag,
        ) -> ::core::result::Result<
            ::std::boxed::Box<dyn ::core::any::Any>,
            remold_reflect::DeserializeError,
        >
        #where_clause
        {
            ::core::result::Result::Ok(::std::boxed::Box::new(#ident #turbofish))
        }
    };

    let info = quote! {
        remold_reflect::info::TypeInfo::Struct(remold_reflect::info::StructInfo::new::<Self>(
            &[],
            __remold_construct #turbofish,
        ))
    };

    Ok(emit_typed(input, helpers, info))
}

/// The enumeration path: build the member whose value equals the data.
fn expand_enum(input: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Remold` enums cannot be generic",
        ));
    }

    let ident = &input.ident;
    let mut variants = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "`Remold` enums must have unit variants only",
            ));
        }
        variants.push(&variant.ident);
    }
    let names: Vec<String> = variants.iter().map(|v| v.to_string()).collect();

    let helpers = quote! {
        fn __remold_from_value(
            data: &remold_reflect::Value,
        ) -> ::core::option::Option<::std::boxed::Box<dyn ::core::any::Any>> {
            match data {
                remold_reflect::Value::Int(value) => {
                    #(
                        if *value == #ident::#variants as i64 {
                            return ::core::option::Option::Some(
                                ::std::boxed::Box::new(#ident::#variants),
                            );
                        }
                    )*
                    ::core::option::Option::None
                }
                remold_reflect::Value::Str(text) => match text.as_str() {
                    #(
                        #names => ::core::option::Option::Some(
                            ::std::boxed::Box::new(#ident::#variants),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                },
                _ => ::core::option::Option::None,
            }
        }
    };

    let info = quote! {
        remold_reflect::info::TypeInfo::Enum(remold_reflect::info::EnumInfo::new::<Self>(
            &[
                #(
                    remold_reflect::info::VariantInfo::new(#names, #ident::#variants as i64)
                ),*
            ],
            __remold_from_value,
        ))
    };

    Ok(emit_typed(input, helpers, info))
}

/// Wraps the helpers and the `Typed` impl in an anonymous const, picking
/// the info cell flavor from the presence of generics.
fn emit_typed(input: &DeriveInput, helpers: TokenStream, info: TokenStream) -> TokenStream {
    let ident = &input.ident;
    let generics = typed_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let cell = if input.generics.params.is_empty() {
        quote! {
            static CELL: remold_reflect::impls::NonGenericTypeInfoCell =
                remold_reflect::impls::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| #info)
        }
    } else {
        quote! {
            static CELL: remold_reflect::impls::GenericTypeInfoCell =
                remold_reflect::impls::GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| #info)
        }
    };

    quote! {
        const _: () = {
            #helpers

            #[automatically_derived]
            impl #impl_generics remold_reflect::info::Typed for #ident #ty_generics #where_clause {
                fn type_info() -> &'static remold_reflect::info::TypeInfo {
                    #cell
                }
            }
        };
    }
}
