//! Tag/ABI selection.
//!
//! Validates the `--tag`/`--abi` expression a caller supplied against
//! one target's installed system images and picks the matching
//! variant. Pure functions; repository state is never mutated.

use avdkit_sdk::{TagAbiVariant, Target, DEFAULT_TAG};

use crate::error::AvdError;

/// A parsed `--abi` value: `abi` or `tag/abi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiSpec {
    pub tag: Option<String>,
    pub abi: String,
}

/// Splits a raw `--abi` value. More than one `/` is rejected.
pub fn parse_abi_spec(raw: &str) -> Result<AbiSpec, AvdError> {
    let parts: Vec<&str> = raw.split('/').collect();
    match parts.as_slice() {
        [abi] => Ok(AbiSpec {
            tag: None,
            abi: (*abi).to_string(),
        }),
        [tag, abi] => Ok(AbiSpec {
            tag: Some((*tag).to_string()),
            abi: (*abi).to_string(),
        }),
        _ => Err(AvdError::InvalidAbiFormat(raw.to_string())),
    }
}

/// Resolves `--tag`/`--abi` to one of the target's variants.
///
/// The effective tag is the one embedded in `--abi`, else the explicit
/// `--tag`, else the target's sole tag when it has exactly one, else
/// `default`. Without any `--abi` the selection must be unambiguous in
/// its scope: the whole target when no tag was given, the tag's
/// variants otherwise.
pub fn select_variant<'t>(
    target: &'t Target,
    tag: Option<&str>,
    abi: Option<&str>,
) -> Result<&'t TagAbiVariant, AvdError> {
    let spec = abi.map(parse_abi_spec).transpose()?;
    let embedded: Option<String> = spec.as_ref().and_then(|s| s.tag.clone());

    if let (Some(explicit), Some(embedded)) = (tag, embedded.as_deref()) {
        if explicit != embedded {
            return Err(AvdError::TagAbiConflict {
                tag: explicit.to_string(),
                abi: abi.unwrap_or_default().to_string(),
            });
        }
    }

    let chosen_tag: Option<String> = embedded.or_else(|| tag.map(str::to_string));

    let Some(spec) = spec else {
        // No --abi at all: the scope must hold exactly one variant.
        return match chosen_tag.as_deref() {
            None => match target.variants.as_slice() {
                [sole] => Ok(sole),
                _ => Err(AvdError::AmbiguousAbi),
            },
            Some(tag) => {
                if !target.has_tag(tag) {
                    return Err(AvdError::InvalidTag(tag.to_string()));
                }
                let mut in_tag = target.variants.iter().filter(|v| v.tag == tag);
                match (in_tag.next(), in_tag.next()) {
                    (Some(sole), None) => Ok(sole),
                    _ => Err(AvdError::AmbiguousAbi),
                }
            }
        };
    };

    let effective_tag = match chosen_tag {
        Some(tag) => tag,
        None => match target.tags().as_slice() {
            [sole] => (*sole).to_string(),
            _ => DEFAULT_TAG.to_string(),
        },
    };

    if !target.has_tag(&effective_tag) {
        return Err(AvdError::InvalidTag(effective_tag));
    }
    target
        .find_variant(&effective_tag, &spec.abi)
        .ok_or(AvdError::InvalidAbi(spec.abi))
}
