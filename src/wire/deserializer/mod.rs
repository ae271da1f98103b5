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

//! Deserializers for the wire formats

pub mod bgp_ls;
pub mod nlri;
pub mod prefix_sid;
pub mod rsvp_te;

use ipnet::{Ipv4Net, Ipv6Net};
use netgauze_parse_utils::{
    ErrorKindSerdeDeref, ReadablePdu, ReadablePduWithTwoInputs, Span,
};
use netgauze_serde_macros::LocatedError;
use nom::{
    error::ErrorKind,
    number::complete::{be_u16, be_u8},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum Ipv4PrefixParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    InvalidIpv4PrefixLen(u8),
}

impl<'a> ReadablePdu<'a, LocatedIpv4PrefixParsingError<'a>> for Ipv4Net {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedIpv4PrefixParsingError<'a>> {
        let input = buf;
        let (buf, prefix_len) = be_u8(buf)?;
        <Self as ReadablePduWithTwoInputs<u8, Span<'_>, LocatedIpv4PrefixParsingError<'_>>>::from_wire(
            buf, prefix_len, input
        )
    }
}

impl<'a> ReadablePduWithTwoInputs<'a, u8, Span<'a>, LocatedIpv4PrefixParsingError<'a>> for Ipv4Net {
    /// A second version for prefixes whose length octet has been consumed
    /// elsewhere, as in labeled-unicast NLRI and route subobjects
    fn from_wire(
        buf: Span<'a>,
        prefix_len: u8,
        prefix_location: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedIpv4PrefixParsingError<'a>> {
        // The prefix value falls on an octet boundary even when prefix_len
        // doesn't: prefix_len=19 still occupies 3 octets
        let prefix_size = if prefix_len >= u8::MAX - 7 {
            u8::MAX
        } else {
            prefix_len.div_ceil(8)
        };
        let (buf, prefix) = nom::bytes::complete::take(prefix_size.min(4))(buf)?;
        let mut network = [0; 4];
        prefix.iter().enumerate().for_each(|(i, v)| network[i] = *v);
        let addr = Ipv4Addr::from(network);

        match Ipv4Net::new(addr, prefix_len) {
            Ok(net) => Ok((buf, net)),
            Err(_) => Err(nom::Err::Error(LocatedIpv4PrefixParsingError::new(
                prefix_location,
                Ipv4PrefixParsingError::InvalidIpv4PrefixLen(prefix_len),
            ))),
        }
    }
}

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum Ipv6PrefixParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    InvalidIpv6PrefixLen(u8),
}

impl<'a> ReadablePdu<'a, LocatedIpv6PrefixParsingError<'a>> for Ipv6Net {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedIpv6PrefixParsingError<'a>> {
        let input = buf;
        let (buf, prefix_len) = be_u8(buf)?;
        <Self as ReadablePduWithTwoInputs<u8, Span<'_>, LocatedIpv6PrefixParsingError<'_>>>::from_wire(
            buf, prefix_len, input
        )
    }
}

impl<'a> ReadablePduWithTwoInputs<'a, u8, Span<'a>, LocatedIpv6PrefixParsingError<'a>> for Ipv6Net {
    fn from_wire(
        buf: Span<'a>,
        prefix_len: u8,
        prefix_location: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedIpv6PrefixParsingError<'a>> {
        let prefix_size = if prefix_len >= u8::MAX - 7 {
            u8::MAX
        } else {
            prefix_len.div_ceil(8)
        };
        let (buf, prefix) = nom::bytes::complete::take(prefix_size.min(16))(buf)?;
        let mut network = [0; 16];
        prefix.iter().enumerate().for_each(|(i, v)| network[i] = *v);
        let addr = Ipv6Addr::from(network);

        match Ipv6Net::new(addr, prefix_len) {
            Ok(net) => Ok((buf, net)),
            Err(_) => Err(nom::Err::Error(LocatedIpv6PrefixParsingError::new(
                prefix_location,
                Ipv6PrefixParsingError::InvalidIpv6PrefixLen(prefix_len),
            ))),
        }
    }
}

/// Reads a `{type:u16}{length:u16}{value}` TLV header and slices out the
/// value. Returns `(type, length, value, remainder)`.
#[inline]
pub fn read_tlv_header_t16_l16<'a, E, T>(buf: Span<'a>) -> Result<(u16, u16, Span<'a>, Span<'a>), E>
where
    E: From<nom::Err<T>>,
    T: nom::error::ParseError<netgauze_locate::BinarySpan<&'a [u8]>>,
{
    let (span, tlv_type) = be_u16(buf)?;
    let (span, tlv_length) = be_u16(span)?;
    let (remainder, data) = nom::bytes::complete::take(tlv_length)(span)?;

    Ok((tlv_type, tlv_length, data, remainder))
}

/// Reads a `{type:u8}{length:u16}{value}` TLV header and slices out the
/// value. Returns `(type, length, value, remainder)`.
#[inline]
pub fn read_tlv_header_t8_l16<'a, E, T>(buf: Span<'a>) -> Result<(u8, u16, Span<'a>, Span<'a>), E>
where
    E: From<nom::Err<T>>,
    T: nom::error::ParseError<netgauze_locate::BinarySpan<&'a [u8]>>,
{
    let (span, tlv_type) = be_u8(buf)?;
    let (span, tlv_length) = be_u16(span)?;
    let (remainder, data) = nom::bytes::complete::take(tlv_length)(span)?;

    Ok((tlv_type, tlv_length, data, remainder))
}
