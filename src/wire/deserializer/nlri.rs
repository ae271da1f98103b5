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

//! Deserializer for labeled-unicast NLRI

use crate::{
    nlri::{Ipv4LabeledUnicastAddress, Ipv6LabeledUnicastAddress, MplsLabel},
    wire::deserializer::{Ipv4PrefixParsingError, Ipv6PrefixParsingError},
};
use netgauze_parse_utils::{
    parse_into_located, parse_into_located_two_inputs, ErrorKindSerdeDeref, ReadablePdu,
    ReadablePduWithTwoInputs, Span,
};
use netgauze_serde_macros::LocatedError;
use nom::{
    error::ErrorKind,
    number::complete::{be_u32, be_u8},
    IResult,
};
use serde::{Deserialize, Serialize};

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum MplsLabelParsingError {
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
}

impl<'a> ReadablePdu<'a, LocatedMplsLabelParsingError<'a>> for MplsLabel {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedMplsLabelParsingError<'a>> {
        let (buf, p1) = be_u8(buf)?;
        let (buf, p2) = be_u8(buf)?;
        let (buf, p3) = be_u8(buf)?;
        Ok((buf, MplsLabel::new([p1, p2, p3])))
    }
}

/// Reads 3-octet labels until the bottom-of-stack bit. In a withdrawal the
/// compatibility value `0x800000` also terminates the stack; it stands for
/// whatever labels were advertised and is not kept as a label, so the stack
/// decodes as empty.
///
/// The second element of the returned pair is the number of labels consumed
/// off the wire, which the NLRI parsers subtract (24 bits each) from the
/// prefix bit-length. It counts the compatibility value while the returned
/// stack does not.
fn parse_labeled_unicast_label_stack(
    buf: Span<'_>,
    is_withdrawal: bool,
) -> IResult<Span<'_>, (Vec<MplsLabel>, u8), LocatedMplsLabelParsingError<'_>> {
    let mut buf = buf;
    let mut label_stack = Vec::<MplsLabel>::new();
    let mut consumed: u8 = 0;
    let mut is_bottom = false;
    while !is_bottom {
        let (t, label): (Span<'_>, MplsLabel) = parse_into_located(buf)?;
        buf = t;
        consumed = consumed.saturating_add(1);
        if is_withdrawal && label.is_unreach_compatibility() {
            break;
        }
        is_bottom = label.is_bottom();
        label_stack.push(label);
    }
    Ok((buf, (label_stack, consumed)))
}

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum Ipv4LabeledUnicastParsingError {
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    MplsLabelError(#[from_located(module = "self")] MplsLabelParsingError),
    Ipv4PrefixError(#[from_located(module = "crate::wire::deserializer")] Ipv4PrefixParsingError),
    /// the NLRI bit-length is shorter than the label stack it carries
    InvalidPrefixLength(u8),
}

impl<'a> ReadablePduWithTwoInputs<'a, bool, bool, LocatedIpv4LabeledUnicastParsingError<'a>>
    for Ipv4LabeledUnicastAddress
{
    /// `add_path` selects the 4-octet path-id prefix, `is_withdrawal` enables
    /// the compatibility label-stack handling
    fn from_wire(
        buf: Span<'a>,
        add_path: bool,
        is_withdrawal: bool,
    ) -> IResult<Span<'a>, Self, LocatedIpv4LabeledUnicastParsingError<'a>> {
        let (buf, path_id) = if add_path {
            let (buf, path_id) = be_u32(buf)?;
            (buf, Some(path_id))
        } else {
            (buf, None)
        };
        let input = buf;
        // the length octet counts bits, labels included
        let (buf, mut prefix_len) = be_u8(buf)?;
        let prefix_bytes = if prefix_len > u8::MAX - 7 {
            u8::MAX
        } else {
            prefix_len.div_ceil(8)
        };
        let (buf, nlri_buf) = nom::bytes::complete::take(prefix_bytes)(buf)?;
        let (nlri_buf, (label_stack, consumed_labels)) =
            parse_labeled_unicast_label_stack(nlri_buf, is_withdrawal).map_err(|err| match err {
                nom::Err::Incomplete(needed) => nom::Err::Incomplete(needed),
                nom::Err::Error(error) => nom::Err::Error(error.into()),
                nom::Err::Failure(failure) => nom::Err::Failure(failure.into()),
            })?;
        let label_bits = (MplsLabel::LEN_BITS as u16 * consumed_labels as u16).min(255) as u8;
        if prefix_len < label_bits {
            return Err(nom::Err::Error(
                LocatedIpv4LabeledUnicastParsingError::new(
                    input,
                    Ipv4LabeledUnicastParsingError::InvalidPrefixLength(prefix_len),
                ),
            ));
        }
        prefix_len -= label_bits;
        let (_buf, network) = parse_into_located_two_inputs(nlri_buf, prefix_len, input)?;
        Ok((buf, Ipv4LabeledUnicastAddress::new(path_id, label_stack, network)))
    }
}

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum Ipv6LabeledUnicastParsingError {
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    MplsLabelError(#[from_located(module = "self")] MplsLabelParsingError),
    Ipv6PrefixError(#[from_located(module = "crate::wire::deserializer")] Ipv6PrefixParsingError),
    InvalidPrefixLength(u8),
}

impl<'a> ReadablePduWithTwoInputs<'a, bool, bool, LocatedIpv6LabeledUnicastParsingError<'a>>
    for Ipv6LabeledUnicastAddress
{
    fn from_wire(
        buf: Span<'a>,
        add_path: bool,
        is_withdrawal: bool,
    ) -> IResult<Span<'a>, Self, LocatedIpv6LabeledUnicastParsingError<'a>> {
        let (buf, path_id) = if add_path {
            let (buf, path_id) = be_u32(buf)?;
            (buf, Some(path_id))
        } else {
            (buf, None)
        };
        let input = buf;
        let (buf, mut prefix_len) = be_u8(buf)?;
        let prefix_bytes = if prefix_len > u8::MAX - 7 {
            u8::MAX
        } else {
            prefix_len.div_ceil(8)
        };
        let (buf, nlri_buf) = nom::bytes::complete::take(prefix_bytes)(buf)?;
        let (nlri_buf, (label_stack, consumed_labels)) =
            parse_labeled_unicast_label_stack(nlri_buf, is_withdrawal).map_err(|err| match err {
                nom::Err::Incomplete(needed) => nom::Err::Incomplete(needed),
                nom::Err::Error(error) => nom::Err::Error(error.into()),
                nom::Err::Failure(failure) => nom::Err::Failure(failure.into()),
            })?;
        let label_bits = (MplsLabel::LEN_BITS as u16 * consumed_labels as u16).min(255) as u8;
        if prefix_len < label_bits {
            return Err(nom::Err::Error(
                LocatedIpv6LabeledUnicastParsingError::new(
                    input,
                    Ipv6LabeledUnicastParsingError::InvalidPrefixLength(prefix_len),
                ),
            ));
        }
        prefix_len -= label_bits;
        let (_buf, network) = parse_into_located_two_inputs(nlri_buf, prefix_len, input)?;
        Ok((buf, Ipv6LabeledUnicastAddress::new(path_id, label_stack, network)))
    }
}
