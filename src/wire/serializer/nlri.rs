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

//! Serializer for labeled-unicast NLRI

use crate::{
    nlri::{Ipv4LabeledUnicastAddress, Ipv6LabeledUnicastAddress, MplsLabel},
    wire::serializer::round_len,
};
use byteorder::{NetworkEndian, WriteBytesExt};
use netgauze_parse_utils::{WritablePdu, WritablePduWithOneInput};
use netgauze_serde_macros::WritingError;
use std::io::Write;

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum MplsLabelWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<MplsLabelWritingError> for MplsLabel {
    const BASE_LENGTH: usize = MplsLabel::LEN;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), MplsLabelWritingError> {
        writer.write_all(self.value())?;
        Ok(())
    }
}

/// Writes an advertised label stack with the bottom-of-stack bit set on the
/// last entry only, regardless of the bit stored on the decoded labels
fn write_label_stack<T: Write>(
    writer: &mut T,
    labels: &[MplsLabel],
) -> Result<(), std::io::Error> {
    let last = labels.len().saturating_sub(1);
    for (idx, label) in labels.iter().enumerate() {
        let mut octets = *label.value();
        if idx == last {
            octets[2] |= 0x01;
        } else {
            octets[2] &= !0x01;
        }
        writer.write_all(&octets)?;
    }
    Ok(())
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum Ipv4LabeledUnicastWritingError {
    StdIOError(#[from_std_io_error] String),
    MplsLabelError(#[from] MplsLabelWritingError),
}

impl WritablePduWithOneInput<bool, Ipv4LabeledUnicastWritingError> for Ipv4LabeledUnicastAddress {
    // length octet
    const BASE_LENGTH: usize = 1;

    fn len(&self, is_withdrawal: bool) -> usize {
        let label_len = if is_withdrawal {
            MplsLabel::LEN
        } else {
            MplsLabel::LEN * self.label_stack().len()
        };
        Self::BASE_LENGTH
            + self.path_id().map_or(0, |_| 4)
            + label_len
            + round_len(self.network().prefix_len()) as usize
    }

    /// A withdrawal writes the compatibility value `0x800000` in place of
    /// the stored label stack
    fn write<T: Write>(
        &self,
        writer: &mut T,
        is_withdrawal: bool,
    ) -> Result<(), Ipv4LabeledUnicastWritingError> {
        if let Some(path_id) = self.path_id() {
            writer.write_u32::<NetworkEndian>(path_id)?;
        }
        let label_count = if is_withdrawal {
            1
        } else {
            self.label_stack().len()
        };
        // the length octet counts bits, labels included
        let bit_len =
            MplsLabel::LEN_BITS as usize * label_count + self.network().prefix_len() as usize;
        writer.write_u8(bit_len as u8)?;
        if is_withdrawal {
            MplsLabel::WITHDRAW_SENTINEL.write(writer)?;
        } else {
            write_label_stack(writer, self.label_stack())?;
        }
        let prefix_octets = round_len(self.network().prefix_len()) as usize;
        writer.write_all(&self.network().network().octets()[..prefix_octets])?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum Ipv6LabeledUnicastWritingError {
    StdIOError(#[from_std_io_error] String),
    MplsLabelError(#[from] MplsLabelWritingError),
}

impl WritablePduWithOneInput<bool, Ipv6LabeledUnicastWritingError> for Ipv6LabeledUnicastAddress {
    const BASE_LENGTH: usize = 1;

    fn len(&self, is_withdrawal: bool) -> usize {
        let label_len = if is_withdrawal {
            MplsLabel::LEN
        } else {
            MplsLabel::LEN * self.label_stack().len()
        };
        Self::BASE_LENGTH
            + self.path_id().map_or(0, |_| 4)
            + label_len
            + round_len(self.network().prefix_len()) as usize
    }

    fn write<T: Write>(
        &self,
        writer: &mut T,
        is_withdrawal: bool,
    ) -> Result<(), Ipv6LabeledUnicastWritingError> {
        if let Some(path_id) = self.path_id() {
            writer.write_u32::<NetworkEndian>(path_id)?;
        }
        let label_count = if is_withdrawal {
            1
        } else {
            self.label_stack().len()
        };
        let bit_len =
            MplsLabel::LEN_BITS as usize * label_count + self.network().prefix_len() as usize;
        writer.write_u8(bit_len as u8)?;
        if is_withdrawal {
            MplsLabel::WITHDRAW_SENTINEL.write(writer)?;
        } else {
            write_label_stack(writer, self.label_stack())?;
        }
        let prefix_octets = round_len(self.network().prefix_len()) as usize;
        writer.write_all(&self.network().network().octets()[..prefix_octets])?;
        Ok(())
    }
}
