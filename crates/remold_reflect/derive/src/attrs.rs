use syn::{Attribute, Result};

use crate::REMOLD_ATTRIBUTE_NAME;

/// Type-level flags parsed from `#[remold(...)]` attributes.
#[derive(Default, Clone, Copy)]
pub(crate) struct TypeFlags {
    /// `#[remold(default)]`: use the plain-object path.
    pub default: bool,
    /// `#[remold(custom)]`: use the self-deserializing interface.
    pub custom: bool,
}

pub(crate) fn parse_type_flags(attrs: &[Attribute]) -> Result<TypeFlags> {
    let mut flags = TypeFlags::default();
    for attr in attrs {
        if !attr.path().is_ident(REMOLD_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                flags.default = true;
                Ok(())
            } else if meta.path.is_ident("custom") {
                flags.custom = true;
                Ok(())
            } else {
                Err(meta.error("expected `default` or `custom`"))
            }
        })?;
    }
    if flags.default && flags.custom {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "`default` and `custom` are mutually exclusive",
        ));
    }
    Ok(flags)
}
