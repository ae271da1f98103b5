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

//! Data types for the BGP Prefix-SID attribute
//! ([RFC8669](https://datatracker.ietf.org/doc/html/rfc8669))

use crate::{iana::BgpSidAttributeType, nlri::MplsLabel};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The BGP Prefix-SID attribute value: a sequence of TLVs in wire order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PrefixSegmentIdentifier {
    tlvs: Vec<BgpSidAttribute>,
}

impl PrefixSegmentIdentifier {
    pub fn new(tlvs: Vec<BgpSidAttribute>) -> Self {
        Self { tlvs }
    }

    pub fn tlvs(&self) -> &[BgpSidAttribute] {
        &self.tlvs
    }
}

#[derive(Display, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BgpSidAttribute {
    /// ```text
    /// 0                   1                   2                   3
    /// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |       Type    |             Length            |   RESERVED    |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |            Flags              |       Label Index             |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |          Label Index          |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// ```
    LabelIndex { flags: u16, label_index: u32 },

    /// ```text
    /// 0                   1                   2                   3
    /// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |     Type      |          Length               |    Flags      |
    /// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
    /// |     Flags     |
    /// +-+-+-+-+-+-+-+-+
    ///
    /// followed by one or more SRGB entries of 6 octets each
    /// ```
    Originator {
        flags: u16,
        srgbs: Vec<SegmentRoutingGlobalBlock>,
    },

    /// TLV types this implementation does not recognize are carried opaquely
    /// so the attribute can be re-serialized unchanged.
    Unknown { code: u8, value: Vec<u8> },
}

impl BgpSidAttribute {
    pub const fn code(&self) -> Result<BgpSidAttributeType, u8> {
        match self {
            BgpSidAttribute::LabelIndex { .. } => Ok(BgpSidAttributeType::LabelIndex),
            BgpSidAttribute::Originator { .. } => Ok(BgpSidAttributeType::OriginatorSrgb),
            BgpSidAttribute::Unknown { code, .. } => Err(*code),
        }
    }

    pub const fn raw_code(&self) -> u8 {
        match self.code() {
            Ok(code) => code as u8,
            Err(code) => code,
        }
    }
}

/// A Segment Routing Global Block: a range of labels `[first_label,
/// first_label + range_size)` reserved for segment routing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SegmentRoutingGlobalBlock {
    pub first_label: MplsLabel,
    pub range_size: [u8; 3],
}
