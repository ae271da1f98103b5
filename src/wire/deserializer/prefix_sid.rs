// Copyright (C) 2024-present The bgp-ext-pkt Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deserializer for the BGP Prefix-SID path attribute. TLV decoders are
//! looked up in a [BgpSidAttributeRegistry]; a code with no registered
//! decoder is kept as [BgpSidAttribute::Unknown] so it survives a
//! re-serialization byte for byte.

use crate::{
    iana::BgpSidAttributeType,
    nlri::MplsLabel,
    prefix_sid::{BgpSidAttribute, PrefixSegmentIdentifier, SegmentRoutingGlobalBlock},
    registry::ParserRegistry,
    wire::deserializer::read_tlv_header_t8_l16,
};
use netgauze_parse_utils::{ErrorKindSerdeDeref, ReadablePduWithOneInput, Span};
use netgauze_serde_macros::LocatedError;
use nom::{
    error::ErrorKind,
    number::complete::{be_u16, be_u32, be_u8},
    IResult,
};
use serde::{Deserialize, Serialize};

/// Decoder for one Prefix-SID TLV, handed the value part of the TLV
pub type BgpSidAttributeParserFn =
    for<'a> fn(Span<'a>) -> IResult<Span<'a>, BgpSidAttribute, LocatedBgpSidAttributeParsingError<'a>>;

/// Registry of Prefix-SID TLV decoders, keyed by TLV code
pub type BgpSidAttributeRegistry = ParserRegistry<u8, BgpSidAttributeParserFn>;

/// The built-in decoder set: Label-Index and Originator-SRGB
pub fn default_prefix_sid_registry() -> BgpSidAttributeRegistry {
    let mut registry = BgpSidAttributeRegistry::empty();
    // a fresh registry with distinct keys, registration cannot collide
    let _ = registry.register(
        BgpSidAttributeType::LabelIndex as u8,
        parse_label_index as BgpSidAttributeParserFn,
    );
    let _ = registry.register(
        BgpSidAttributeType::OriginatorSrgb as u8,
        parse_originator_srgb as BgpSidAttributeParserFn,
    );
    registry
}

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum SegmentIdentifierParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    BgpSidAttributeError(#[from_located(module = "self")] BgpSidAttributeParsingError),
}

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum BgpSidAttributeParsingError {
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    /// the Originator-SRGB value after the flags is not a whole number of
    /// 6-octet blocks
    InvalidSrgbLength(usize),
}

impl<'a, 'r>
    ReadablePduWithOneInput<'a, &'r BgpSidAttributeRegistry, LocatedSegmentIdentifierParsingError<'a>>
    for PrefixSegmentIdentifier
{
    fn from_wire(
        buf: Span<'a>,
        registry: &'r BgpSidAttributeRegistry,
    ) -> IResult<Span<'a>, Self, LocatedSegmentIdentifierParsingError<'a>> {
        let mut buf = buf;
        let mut tlvs = Vec::new();
        while !buf.is_empty() {
            let (code, _tlv_length, data, remainder) = read_tlv_header_t8_l16(buf)?;
            match registry.get(&code) {
                Some(parser) => {
                    let (_, attribute) = parser(data).map_err(|err| match err {
                        nom::Err::Incomplete(needed) => nom::Err::Incomplete(needed),
                        nom::Err::Error(error) => nom::Err::Error(error.into()),
                        nom::Err::Failure(failure) => nom::Err::Failure(failure.into()),
                    })?;
                    tlvs.push(attribute);
                }
                None => {
                    tlvs.push(BgpSidAttribute::Unknown {
                        code,
                        value: data.to_vec(),
                    });
                }
            }
            buf = remainder;
        }
        Ok((buf, PrefixSegmentIdentifier::new(tlvs)))
    }
}

/// Label-Index TLV value: one reserved octet, 2 octets of flags, and the
/// 4-octet label index
/// [RFC8669 Section 3.1](https://datatracker.ietf.org/doc/html/rfc8669#section-3.1)
pub fn parse_label_index(
    buf: Span<'_>,
) -> IResult<Span<'_>, BgpSidAttribute, LocatedBgpSidAttributeParsingError<'_>> {
    let (buf, _reserved) = be_u8(buf)?;
    let (buf, flags) = be_u16(buf)?;
    let (buf, label_index) = be_u32(buf)?;
    Ok((buf, BgpSidAttribute::LabelIndex { flags, label_index }))
}

/// Originator-SRGB TLV value: 2 octets of flags then `(first label, range
/// size)` pairs of 3 octets each
/// [RFC8669 Section 3.2](https://datatracker.ietf.org/doc/html/rfc8669#section-3.2)
pub fn parse_originator_srgb(
    buf: Span<'_>,
) -> IResult<Span<'_>, BgpSidAttribute, LocatedBgpSidAttributeParsingError<'_>> {
    let (buf, flags) = be_u16(buf)?;
    if buf.len() % 6 != 0 {
        return Err(nom::Err::Error(LocatedBgpSidAttributeParsingError::new(
            buf,
            BgpSidAttributeParsingError::InvalidSrgbLength(buf.len()),
        )));
    }
    let mut buf = buf;
    let mut srgbs = Vec::new();
    while !buf.is_empty() {
        let (span, l1) = be_u8(buf)?;
        let (span, l2) = be_u8(span)?;
        let (span, l3) = be_u8(span)?;
        let (span, r1) = be_u8(span)?;
        let (span, r2) = be_u8(span)?;
        let (span, r3) = be_u8(span)?;
        srgbs.push(SegmentRoutingGlobalBlock {
            first_label: MplsLabel::new([l1, l2, l3]),
            range_size: [r1, r2, r3],
        });
        buf = span;
    }
    Ok((buf, BgpSidAttribute::Originator { flags, srgbs }))
}
