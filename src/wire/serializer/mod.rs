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

//! Serializers for the wire formats

pub mod bgp_ls;
pub mod nlri;
pub mod prefix_sid;
pub mod rsvp_te;

use byteorder::{NetworkEndian, WriteBytesExt};
use std::io::Write;

/// Helper method to round up the number of bytes based on a given length
#[inline]
pub(crate) fn round_len(len: u8) -> u8 {
    (len as f32 / 8.0).ceil() as u8
}

/// Writes a `{type:u16}{length:u16}` TLV header.
///
/// `tlv_length` is the total TLV length on the wire, type and length fields
/// included; the written length field is `tlv_length - 4` since "Length"
/// counts the value only.
#[inline]
pub(crate) fn write_tlv_header_t16_l16<T: Write>(
    writer: &mut T,
    tlv_type: u16,
    tlv_length: u16,
) -> Result<(), std::io::Error> {
    writer.write_u16::<NetworkEndian>(tlv_type)?;
    writer.write_u16::<NetworkEndian>(tlv_length - 4)?;
    Ok(())
}

/// Writes a `{type:u8}{length:u16}` TLV header; the written length field is
/// `tlv_length - 3`
#[inline]
pub(crate) fn write_tlv_header_t8_l16<T: Write>(
    writer: &mut T,
    tlv_type: u8,
    tlv_length: u16,
) -> Result<(), std::io::Error> {
    writer.write_u8(tlv_type)?;
    writer.write_u16::<NetworkEndian>(tlv_length - 3)?;
    Ok(())
}
