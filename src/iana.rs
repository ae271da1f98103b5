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

//! Code point registries for the supported BGP extensions: BGP-LS attribute
//! TLV types ([RFC7752](https://datatracker.ietf.org/doc/html/rfc7752)) and
//! BGP Prefix-SID TLV types ([RFC8669](https://datatracker.ietf.org/doc/html/rfc8669)).

use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

/// Used when an undefined code point is attempted to be converted to an enum
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum IanaValueError<T> {
    /// Reserved Values
    Reserved(T),

    /// Unassigned or Private Use values
    Unknown(T),
}

/// BGP-LS Attribute TLVs valid on a Link object
/// [IANA](https://www.iana.org/assignments/bgp-ls-parameters/bgp-ls-parameters.xhtml)
#[repr(u16)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpLsLinkAttributeType {
    MultiTopologyIdentifier = 263,
    LocalNodeIpv4RouterId = 1028,
    LocalNodeIpv6RouterId = 1029,
    RemoteNodeIpv4RouterId = 1030,
    RemoteNodeIpv6RouterId = 1031,
    AdminGroup = 1088,
    MaximumLinkBandwidth = 1089,
    MaximumReservableLinkBandwidth = 1090,
    UnreservedBandwidth = 1091,
    TeDefaultMetric = 1092,
    LinkProtectionType = 1093,
    MplsProtocolMask = 1094,
    IgpMetric = 1095,
    SharedRiskLinkGroup = 1096,
    OpaqueLinkAttribute = 1097,
    LinkName = 1098,
    SrAdjacencySid = 1099,
    SrLanAdjacencySid = 1100,
    PeerNodeSid = 1101,
    PeerAdjSid = 1102,
    PeerSetSid = 1103,
}

#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BgpLsLinkAttributeTypeError(pub IanaValueError<u16>);

impl From<BgpLsLinkAttributeType> for u16 {
    fn from(value: BgpLsLinkAttributeType) -> Self {
        value as u16
    }
}

impl TryFrom<u16> for BgpLsLinkAttributeType {
    type Error = BgpLsLinkAttributeTypeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => {
                if value <= 255 {
                    Err(BgpLsLinkAttributeTypeError(IanaValueError::Reserved(value)))
                } else {
                    Err(BgpLsLinkAttributeTypeError(IanaValueError::Unknown(value)))
                }
            }
        }
    }
}

/// BGP-LS Attribute TLVs valid on a Node object
/// [IANA](https://www.iana.org/assignments/bgp-ls-parameters/bgp-ls-parameters.xhtml)
#[repr(u16)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpLsNodeAttributeType {
    MultiTopologyIdentifier = 263,
    NodeFlagBits = 1024,
    OpaqueNodeAttribute = 1025,
    DynamicHostname = 1026,
    IsIsArea = 1027,
    LocalNodeIpv4RouterId = 1028,
    LocalNodeIpv6RouterId = 1029,
    SrAlgorithm = 1035,
}

#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BgpLsNodeAttributeTypeError(pub IanaValueError<u16>);

impl From<BgpLsNodeAttributeType> for u16 {
    fn from(value: BgpLsNodeAttributeType) -> Self {
        value as u16
    }
}

impl TryFrom<u16> for BgpLsNodeAttributeType {
    type Error = BgpLsNodeAttributeTypeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => {
                if value <= 255 {
                    Err(BgpLsNodeAttributeTypeError(IanaValueError::Reserved(value)))
                } else {
                    Err(BgpLsNodeAttributeTypeError(IanaValueError::Unknown(value)))
                }
            }
        }
    }
}

/// BGP-LS Attribute TLVs valid on a Prefix object
/// [IANA](https://www.iana.org/assignments/bgp-ls-parameters/bgp-ls-parameters.xhtml)
#[repr(u16)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpLsPrefixAttributeType {
    IgpFlags = 1152,
    IgpRouteTag = 1153,
    IgpExtendedRouteTag = 1154,
    PrefixMetric = 1155,
    OspfForwardingAddress = 1156,
    OpaquePrefixAttribute = 1157,
}

#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BgpLsPrefixAttributeTypeError(pub IanaValueError<u16>);

impl From<BgpLsPrefixAttributeType> for u16 {
    fn from(value: BgpLsPrefixAttributeType) -> Self {
        value as u16
    }
}

impl TryFrom<u16> for BgpLsPrefixAttributeType {
    type Error = BgpLsPrefixAttributeTypeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => {
                if value <= 255 {
                    Err(BgpLsPrefixAttributeTypeError(IanaValueError::Reserved(
                        value,
                    )))
                } else {
                    Err(BgpLsPrefixAttributeTypeError(IanaValueError::Unknown(
                        value,
                    )))
                }
            }
        }
    }
}

/// Node flag bits [RFC7752 Section 3.3.1.1](https://datatracker.ietf.org/doc/html/rfc7752#section-3.3.1.1)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NodeFlagsBits {
    Overload = 0x80,
    Attached = 0x40,
    External = 0x20,
    Abr = 0x10,
    Router = 0x08,
    V6 = 0x04,
}

/// IGP prefix flags [RFC7752 Section 3.3.3.1](https://datatracker.ietf.org/doc/html/rfc7752#section-3.3.3.1)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum IgpFlagsBits {
    IsIsUpDown = 0x80,
    OspfNoUnicast = 0x40,
    OspfLocalAddress = 0x20,
    OspfPropagateNssa = 0x10,
}

/// MPLS protocol mask bits [RFC7752 Section 3.3.2.2](https://datatracker.ietf.org/doc/html/rfc7752#section-3.3.2.2)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MplsProtocolMaskBits {
    LabelDistributionProtocol = 0x80,
    ExtensionToRsvpForLspTunnels = 0x40,
}

/// Link protection capability bits [RFC5307 Section 1.2](https://datatracker.ietf.org/doc/html/rfc5307#section-1.2)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LinkProtectionTypeBits {
    ExtraTraffic = 0x01,
    Unprotected = 0x02,
    Shared = 0x04,
    Dedicated1c1 = 0x08,
    Dedicated1p1 = 0x10,
    Enhanced = 0x20,
}

/// BGP Prefix-SID attribute TLV types
/// [IANA](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#prefix-sid-label-index)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpSidAttributeType {
    LabelIndex = 1,
    OriginatorSrgb = 3,
}

#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BgpSidAttributeTypeError(pub IanaValueError<u8>);

impl From<BgpSidAttributeType> for u8 {
    fn from(value: BgpSidAttributeType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BgpSidAttributeType {
    type Error = BgpSidAttributeTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => {
                if value == 0 {
                    Err(BgpSidAttributeTypeError(IanaValueError::Reserved(value)))
                } else {
                    Err(BgpSidAttributeTypeError(IanaValueError::Unknown(value)))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_attribute_type_ranges() {
        assert_eq!(
            BgpLsLinkAttributeType::try_from(263),
            Ok(BgpLsLinkAttributeType::MultiTopologyIdentifier)
        );
        assert_eq!(
            BgpLsLinkAttributeType::try_from(100),
            Err(BgpLsLinkAttributeTypeError(IanaValueError::Reserved(100)))
        );
        assert_eq!(
            BgpLsLinkAttributeType::try_from(0xfffe),
            Err(BgpLsLinkAttributeTypeError(IanaValueError::Unknown(0xfffe)))
        );
    }

    #[test]
    fn test_sid_attribute_type_ranges() {
        assert_eq!(
            BgpSidAttributeType::try_from(1),
            Ok(BgpSidAttributeType::LabelIndex)
        );
        assert_eq!(
            BgpSidAttributeType::try_from(0),
            Err(BgpSidAttributeTypeError(IanaValueError::Reserved(0)))
        );
        assert_eq!(
            BgpSidAttributeType::try_from(200),
            Err(BgpSidAttributeTypeError(IanaValueError::Unknown(200)))
        );
    }
}
