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

//! Data types for Labeled-Unicast Network Layer Reachability Information
//! ([RFC8277](https://datatracker.ietf.org/doc/html/rfc8277))

use ipnet::{Ipv4Net, Ipv6Net};
use serde::{Deserialize, Serialize};

/// A 3-octet MPLS label stack entry: 20-bit label value, 3-bit traffic class,
/// and the bottom-of-stack bit in the least significant position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MplsLabel([u8; 3]);

impl MplsLabel {
    /// Reserved value written in place of the label stack when withdrawing a
    /// labeled route [RFC8277 Section 2.4](https://datatracker.ietf.org/doc/html/rfc8277#section-2.4)
    pub const WITHDRAW_SENTINEL: MplsLabel = MplsLabel([0x80, 0x00, 0x00]);

    /// Wire size of one label stack entry in octets
    pub const LEN: usize = 3;
    /// Wire size of one label stack entry in bits
    pub const LEN_BITS: u8 = 24;

    pub const fn new(label: [u8; 3]) -> Self {
        Self(label)
    }

    pub const fn new_bottom(label: [u8; 3]) -> Self {
        Self([label[0], label[1], label[2] | 0x01])
    }

    pub const fn value(&self) -> &[u8; 3] {
        &self.0
    }

    pub const fn is_bottom(&self) -> bool {
        self.0[2] & 0x01 == 0x01
    }

    /// Checks for the compatibility value `0x800000` some implementations
    /// write instead of a label stack in withdrawal NLRI
    pub const fn is_unreach_compatibility(&self) -> bool {
        self.0[0] == 0x80 && self.0[1] == 0x00 && self.0[2] == 0x00
    }
}

/// IPv4 Labeled-Unicast destination: optional path-id, a label stack, and the
/// reachable prefix.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ipv4LabeledUnicastAddress {
    path_id: Option<u32>,
    label_stack: Vec<MplsLabel>,
    network: Ipv4Net,
}

impl Ipv4LabeledUnicastAddress {
    pub const fn new(path_id: Option<u32>, label_stack: Vec<MplsLabel>, network: Ipv4Net) -> Self {
        Self {
            path_id,
            label_stack,
            network,
        }
    }

    pub const fn new_no_path_id(label_stack: Vec<MplsLabel>, network: Ipv4Net) -> Self {
        Self {
            path_id: None,
            label_stack,
            network,
        }
    }

    pub const fn path_id(&self) -> Option<u32> {
        self.path_id
    }

    pub const fn label_stack(&self) -> &Vec<MplsLabel> {
        &self.label_stack
    }

    pub const fn network(&self) -> Ipv4Net {
        self.network
    }
}

/// IPv6 Labeled-Unicast destination: optional path-id, a label stack, and the
/// reachable prefix.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ipv6LabeledUnicastAddress {
    path_id: Option<u32>,
    label_stack: Vec<MplsLabel>,
    network: Ipv6Net,
}

impl Ipv6LabeledUnicastAddress {
    pub const fn new(path_id: Option<u32>, label_stack: Vec<MplsLabel>, network: Ipv6Net) -> Self {
        Self {
            path_id,
            label_stack,
            network,
        }
    }

    pub const fn new_no_path_id(label_stack: Vec<MplsLabel>, network: Ipv6Net) -> Self {
        Self {
            path_id: None,
            label_stack,
            network,
        }
    }

    pub const fn path_id(&self) -> Option<u32> {
        self.path_id
    }

    pub const fn label_stack(&self) -> &Vec<MplsLabel> {
        &self.label_stack
    }

    pub const fn network(&self) -> Ipv6Net {
        self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpls_label_bottom_bit() {
        let label = MplsLabel::new([0x00, 0x01, 0x61]);
        assert!(label.is_bottom());
        assert!(!MplsLabel::new([0x00, 0x01, 0x60]).is_bottom());
    }

    #[test]
    fn test_withdraw_sentinel() {
        assert!(MplsLabel::WITHDRAW_SENTINEL.is_unreach_compatibility());
        assert!(!MplsLabel::WITHDRAW_SENTINEL.is_bottom());
        assert!(!MplsLabel::new([0x80, 0x00, 0x01]).is_unreach_compatibility());
    }
}
