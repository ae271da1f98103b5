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

//! Serializer for the BGP Prefix-SID attribute TLVs.

use crate::{
    prefix_sid::{BgpSidAttribute, PrefixSegmentIdentifier},
    wire::serializer::write_tlv_header_t8_l16,
};
use byteorder::{NetworkEndian, WriteBytesExt};
use netgauze_parse_utils::WritablePdu;
use netgauze_serde_macros::WritingError;
use std::io::Write;

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum SegmentIdentifierWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<SegmentIdentifierWritingError> for PrefixSegmentIdentifier {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        self.tlvs().iter().map(|tlv| tlv.len()).sum()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), SegmentIdentifierWritingError> {
        for tlv in self.tlvs() {
            tlv.write(writer)?;
        }
        Ok(())
    }
}

impl WritablePdu<SegmentIdentifierWritingError> for BgpSidAttribute {
    // one byte type and two bytes length
    const BASE_LENGTH: usize = 3;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
            + match self {
                BgpSidAttribute::LabelIndex { .. } => 7,
                BgpSidAttribute::Originator { srgbs, .. } => 2 + 6 * srgbs.len(),
                BgpSidAttribute::Unknown { value, .. } => value.len(),
            }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), SegmentIdentifierWritingError> {
        write_tlv_header_t8_l16(writer, self.raw_code(), self.len() as u16)?;
        match self {
            BgpSidAttribute::LabelIndex { flags, label_index } => {
                writer.write_u8(0)?; // reserved
                writer.write_u16::<NetworkEndian>(*flags)?;
                writer.write_u32::<NetworkEndian>(*label_index)?;
            }
            BgpSidAttribute::Originator { flags, srgbs } => {
                writer.write_u16::<NetworkEndian>(*flags)?;
                for srgb in srgbs {
                    writer.write_all(srgb.first_label.value())?;
                    writer.write_all(&srgb.range_size)?;
                }
            }
            BgpSidAttribute::Unknown { value, .. } => {
                writer.write_all(value)?;
            }
        }
        Ok(())
    }
}
