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

//! Deserializer for RSVP-TE objects inside a TE-LSP attribute. Object
//! decoders are dispatched through an [RsvpTeObjectRegistry] keyed by
//! `(class-num, c-type)`; a pair with no registered decoder fails the whole
//! attribute, unlike the lenient BGP-LS TLV tables.

use crate::{
    registry::ParserRegistry,
    rsvp_te::{
        AdminStatusObject, AssociationObject, AttributesSubTlv, BandwidthObject, DetourEntry,
        DetourObject, ExcludeRouteObject, ExplicitRouteObject, FastRerouteObject,
        FlowSpecObject, LspAttributesObject, LspRequiredAttributesObject, MetricObject,
        PrimaryPathRouteObject, ProtectionBody, ProtectionObject, RecordRouteObject,
        RouteSubobject, RsvpTeObject, SecondaryExplicitRouteObject, SecondaryRecordRouteObject,
        SenderTspecObject, SessionAttributeObject, TeLspAttributes, TspecParameters,
    },
    wire::deserializer::read_tlv_header_t16_l16,
};
use ipnet::{Ipv4Net, Ipv6Net};
use log::debug;
use netgauze_parse_utils::{ErrorKindSerdeDeref, ReadablePduWithOneInput, Span};
use netgauze_serde_macros::LocatedError;
use nom::{
    error::{ErrorKind, FromExternalError},
    number::complete::{be_f32, be_u128, be_u16, be_u32, be_u8},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::{
    net::{Ipv4Addr, Ipv6Addr},
    string::FromUtf8Error,
};

/// Decoder for one RSVP-TE object, handed the value part of the object
pub type RsvpTeObjectParserFn =
    for<'a> fn(Span<'a>) -> IResult<Span<'a>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'a>>;

/// Registry of RSVP-TE object decoders, keyed by `(class-num, c-type)`
pub type RsvpTeObjectRegistry = ParserRegistry<(u8, u8), RsvpTeObjectParserFn>;

/// The built-in decoder set covering every object flavor in [RsvpTeObject]
pub fn default_rsvp_te_registry() -> RsvpTeObjectRegistry {
    let mut registry = RsvpTeObjectRegistry::empty();
    let defaults: [((u8, u8), RsvpTeObjectParserFn); 24] = [
        (
            (SenderTspecObject::CLASS_NUM, SenderTspecObject::C_TYPE),
            parse_sender_tspec,
        ),
        (
            (FlowSpecObject::CLASS_NUM, FlowSpecObject::C_TYPE),
            parse_flow_spec,
        ),
        (
            (
                SessionAttributeObject::CLASS_NUM,
                SessionAttributeObject::C_TYPE_WITH_RESOURCE_AFFINITIES,
            ),
            parse_session_attribute_with_affinities,
        ),
        (
            (
                SessionAttributeObject::CLASS_NUM,
                SessionAttributeObject::C_TYPE_BASIC,
            ),
            parse_session_attribute_basic,
        ),
        (
            (ExplicitRouteObject::CLASS_NUM, ExplicitRouteObject::C_TYPE),
            parse_explicit_route,
        ),
        (
            (RecordRouteObject::CLASS_NUM, RecordRouteObject::C_TYPE),
            parse_record_route,
        ),
        (
            (ExcludeRouteObject::CLASS_NUM, ExcludeRouteObject::C_TYPE),
            parse_exclude_route,
        ),
        (
            (
                PrimaryPathRouteObject::CLASS_NUM,
                PrimaryPathRouteObject::C_TYPE,
            ),
            parse_primary_path_route,
        ),
        (
            (
                SecondaryExplicitRouteObject::CLASS_NUM,
                SecondaryExplicitRouteObject::C_TYPE,
            ),
            parse_secondary_explicit_route,
        ),
        (
            (
                SecondaryRecordRouteObject::CLASS_NUM,
                SecondaryRecordRouteObject::C_TYPE,
            ),
            parse_secondary_record_route,
        ),
        (
            (FastRerouteObject::CLASS_NUM, FastRerouteObject::C_TYPE_1),
            parse_fast_reroute_type1,
        ),
        (
            (
                FastRerouteObject::CLASS_NUM,
                FastRerouteObject::C_TYPE_LEGACY,
            ),
            parse_fast_reroute_legacy,
        ),
        (
            (DetourObject::CLASS_NUM, DetourObject::C_TYPE_IPV4),
            parse_detour_ipv4,
        ),
        (
            (DetourObject::CLASS_NUM, DetourObject::C_TYPE_IPV6),
            parse_detour_ipv6,
        ),
        (
            (LspAttributesObject::CLASS_NUM, LspAttributesObject::C_TYPE),
            parse_lsp_attributes,
        ),
        (
            (
                LspRequiredAttributesObject::CLASS_NUM,
                LspRequiredAttributesObject::C_TYPE,
            ),
            parse_lsp_required_attributes,
        ),
        (
            (ProtectionObject::CLASS_NUM, ProtectionBody::C_TYPE_1),
            parse_protection_type1,
        ),
        (
            (ProtectionObject::CLASS_NUM, ProtectionBody::C_TYPE_2),
            parse_protection_type2,
        ),
        (
            (AssociationObject::CLASS_NUM, AssociationObject::C_TYPE_IPV4),
            parse_association_ipv4,
        ),
        (
            (AssociationObject::CLASS_NUM, AssociationObject::C_TYPE_IPV6),
            parse_association_ipv6,
        ),
        (
            (AdminStatusObject::CLASS_NUM, AdminStatusObject::C_TYPE),
            parse_admin_status,
        ),
        (
            (BandwidthObject::CLASS_NUM, BandwidthObject::C_TYPE_BASIC),
            parse_bandwidth_basic,
        ),
        (
            (
                BandwidthObject::CLASS_NUM,
                BandwidthObject::C_TYPE_REOPTIMIZATION,
            ),
            parse_bandwidth_reoptimization,
        ),
        ((MetricObject::CLASS_NUM, MetricObject::C_TYPE), parse_metric),
    ];
    for (key, parser) in defaults {
        // keys are distinct constants, registration cannot collide
        let _ = registry.register(key, parser);
    }
    registry
}

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum TeLspAttributesParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    /// the enclosing TLV code is not the TE-LSP one
    InvalidTlvType(u16),
    /// no decoder registered for this `(class-num, c-type)` pair
    UnknownObject { class_num: u8, c_type: u8 },
    RsvpTeObjectError(#[from_located(module = "self")] RsvpTeObjectParsingError),
}

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum RsvpTeObjectParsingError {
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    Utf8Error(String),
    InvalidServiceHeader(u8),
    InvalidProtectionType(u8),
    InvalidPrefixLength(u8),
}

impl<'a> FromExternalError<Span<'a>, FromUtf8Error> for LocatedRsvpTeObjectParsingError<'a> {
    fn from_external_error(input: Span<'a>, _kind: ErrorKind, error: FromUtf8Error) -> Self {
        LocatedRsvpTeObjectParsingError::new(
            input,
            RsvpTeObjectParsingError::Utf8Error(error.to_string()),
        )
    }
}

impl<'a, 'r>
    ReadablePduWithOneInput<'a, &'r RsvpTeObjectRegistry, LocatedTeLspAttributesParsingError<'a>>
    for TeLspAttributes
{
    fn from_wire(
        buf: Span<'a>,
        registry: &'r RsvpTeObjectRegistry,
    ) -> IResult<Span<'a>, Self, LocatedTeLspAttributesParsingError<'a>> {
        let input = buf;
        let (tlv_type, _tlv_length, data, remainder) = read_tlv_header_t16_l16(buf)?;
        if tlv_type != TeLspAttributes::TLV_TYPE {
            return Err(nom::Err::Error(LocatedTeLspAttributesParsingError::new(
                input,
                TeLspAttributesParsingError::InvalidTlvType(tlv_type),
            )));
        }
        let mut attributes = TeLspAttributes::default();
        let mut data = data;
        while !data.is_empty() {
            let object_input = data;
            // object framing: value length (header excluded), class-num, c-type
            let (span, length) = be_u16(data)?;
            let (span, class_num) = be_u8(span)?;
            let (span, c_type) = be_u8(span)?;
            let (object_remainder, value) = nom::bytes::complete::take(length)(span)?;
            match registry.get(&(class_num, c_type)) {
                Some(parser) => {
                    let (_, object) = parser(value).map_err(|err| match err {
                        nom::Err::Incomplete(needed) => nom::Err::Incomplete(needed),
                        nom::Err::Error(error) => nom::Err::Error(error.into()),
                        nom::Err::Failure(failure) => nom::Err::Failure(failure.into()),
                    })?;
                    attributes.set(object);
                }
                None => {
                    return Err(nom::Err::Error(LocatedTeLspAttributesParsingError::new(
                        object_input,
                        TeLspAttributesParsingError::UnknownObject { class_num, c_type },
                    )));
                }
            }
            data = object_remainder;
        }
        Ok((remainder, attributes))
    }
}

fn parse_tspec_parameters(
    buf: Span<'_>,
) -> IResult<Span<'_>, TspecParameters, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, token_bucket_rate) = be_f32(buf)?;
    let (buf, token_bucket_size) = be_f32(buf)?;
    let (buf, peak_data_rate) = be_f32(buf)?;
    let (buf, minimum_policed_unit) = be_u32(buf)?;
    let (buf, maximum_packet_size) = be_u32(buf)?;
    Ok((
        buf,
        TspecParameters {
            token_bucket_rate,
            token_bucket_size,
            peak_data_rate,
            minimum_policed_unit,
            maximum_packet_size,
        },
    ))
}

pub fn parse_sender_tspec(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    // message header, service header, and parameter header carry fixed
    // values for the token bucket service
    let (buf, _message_header) = be_u32(buf)?;
    let (buf, _service_header) = be_u32(buf)?;
    let (buf, _parameter_header) = be_u32(buf)?;
    let (buf, tspec) = parse_tspec_parameters(buf)?;
    Ok((buf, RsvpTeObject::SenderTspec(SenderTspecObject(tspec))))
}

pub fn parse_flow_spec(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, _message_header) = be_u32(buf)?;
    let input = buf;
    let (buf, service) = be_u8(buf)?;
    let (buf, _reserved) = be_u8(buf)?;
    let (buf, _service_length) = be_u16(buf)?;
    let (buf, _parameter_header) = be_u32(buf)?;
    let (buf, tspec) = parse_tspec_parameters(buf)?;
    match service {
        FlowSpecObject::CONTROLLED_LOAD_SERVICE => {
            Ok((buf, RsvpTeObject::FlowSpec(FlowSpecObject::ControlledLoad { tspec })))
        }
        FlowSpecObject::GUARANTEED_SERVICE => {
            let (buf, _guaranteed_parameter_header) = be_u32(buf)?;
            let (buf, rate) = be_f32(buf)?;
            let (buf, slack_term) = be_u32(buf)?;
            Ok((
                buf,
                RsvpTeObject::FlowSpec(FlowSpecObject::Guaranteed {
                    tspec,
                    rate,
                    slack_term,
                }),
            ))
        }
        _ => Err(nom::Err::Error(LocatedRsvpTeObjectParsingError::new(
            input,
            RsvpTeObjectParsingError::InvalidServiceHeader(service),
        ))),
    }
}

/// Reads the tail common to both session-attribute flavors: priorities,
/// flags, and the NUL-padded display name
fn parse_session_attribute_tail(
    buf: Span<'_>,
) -> IResult<Span<'_>, (u8, u8, u8, String), LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, setup_priority) = be_u8(buf)?;
    let (buf, holding_priority) = be_u8(buf)?;
    let (buf, flags) = be_u8(buf)?;
    let (buf, name_length) = be_u8(buf)?;
    let (buf, name) = nom::combinator::map_res(
        nom::bytes::complete::take(name_length),
        |x: Span<'_>| String::from_utf8(x.to_vec()),
    )(buf)?;
    let session_name = name.trim_end_matches('\0').to_string();
    Ok((buf, (setup_priority, holding_priority, flags, session_name)))
}

pub fn parse_session_attribute_with_affinities(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, exclude_any) = be_u32(buf)?;
    let (buf, include_any) = be_u32(buf)?;
    let (buf, include_all) = be_u32(buf)?;
    let (buf, (setup_priority, holding_priority, flags, session_name)) =
        parse_session_attribute_tail(buf)?;
    Ok((
        buf,
        RsvpTeObject::SessionAttribute(SessionAttributeObject::WithResourceAffinities {
            exclude_any,
            include_any,
            include_all,
            setup_priority,
            holding_priority,
            flags,
            session_name,
        }),
    ))
}

pub fn parse_session_attribute_basic(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, (setup_priority, holding_priority, flags, session_name)) =
        parse_session_attribute_tail(buf)?;
    Ok((
        buf,
        RsvpTeObject::SessionAttribute(SessionAttributeObject::Basic {
            setup_priority,
            holding_priority,
            flags,
            session_name,
        }),
    ))
}

fn parse_protection_body(
    buf: Span<'_>,
    c_type: u8,
) -> IResult<Span<'_>, ProtectionBody, LocatedRsvpTeObjectParsingError<'_>> {
    match c_type {
        ProtectionBody::C_TYPE_1 => {
            let (buf, flags) = be_u8(buf)?;
            let (buf, _reserved) = be_u16(buf)?;
            let (buf, link_flags) = be_u8(buf)?;
            Ok((
                buf,
                ProtectionBody::Type1 {
                    secondary: flags & 0x80 == 0x80,
                    link_flags,
                },
            ))
        }
        ProtectionBody::C_TYPE_2 => {
            let (buf, flags) = be_u8(buf)?;
            let (buf, lsp_flags) = be_u8(buf)?;
            let (buf, _reserved) = be_u8(buf)?;
            let (buf, link_flags) = be_u8(buf)?;
            let (buf, seg_byte) = be_u8(buf)?;
            let (buf, seg_flags) = be_u8(buf)?;
            let (buf, _reserved2) = be_u16(buf)?;
            Ok((
                buf,
                ProtectionBody::Type2 {
                    secondary: flags & 0x80 == 0x80,
                    protecting: flags & 0x40 == 0x40,
                    notification: flags & 0x20 == 0x20,
                    operational: flags & 0x10 == 0x10,
                    lsp_flags,
                    link_flags,
                    in_place: seg_byte & 0x80 == 0x80,
                    required: seg_byte & 0x40 == 0x40,
                    seg_flags,
                },
            ))
        }
        _ => Err(nom::Err::Error(LocatedRsvpTeObjectParsingError::new(
            buf,
            RsvpTeObjectParsingError::InvalidProtectionType(c_type),
        ))),
    }
}

pub fn parse_protection_type1(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, body) = parse_protection_body(buf, ProtectionBody::C_TYPE_1)?;
    Ok((buf, RsvpTeObject::Protection(ProtectionObject { body })))
}

pub fn parse_protection_type2(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, body) = parse_protection_body(buf, ProtectionBody::C_TYPE_2)?;
    Ok((buf, RsvpTeObject::Protection(ProtectionObject { body })))
}

/// Reads route subobjects until the span is empty. A subobject with an
/// unsupported type is logged and skipped, its length octet tells how far.
fn parse_route_subobjects(
    buf: Span<'_>,
) -> IResult<Span<'_>, Vec<RouteSubobject>, LocatedRsvpTeObjectParsingError<'_>> {
    let mut buf = buf;
    let mut subobjects = Vec::new();
    while !buf.is_empty() {
        let input = buf;
        let (span, type_octet) = be_u8(buf)?;
        let loose = type_octet & RouteSubobject::LOOSE_BIT == RouteSubobject::LOOSE_BIT;
        let subobject_type = type_octet & !RouteSubobject::LOOSE_BIT;
        let (span, subobject_length) = be_u8(span)?;
        let (remainder, body) =
            nom::bytes::complete::take(subobject_length.saturating_sub(2))(span)?;
        match subobject_type {
            RouteSubobject::TYPE_IPV4_PREFIX => {
                let (body, address) = be_u32(body)?;
                let (body, prefix_len) = be_u8(body)?;
                let (_, attributes) = be_u8(body)?;
                let prefix = Ipv4Net::new(Ipv4Addr::from(address), prefix_len).map_err(|_| {
                    nom::Err::Error(LocatedRsvpTeObjectParsingError::new(
                        input,
                        RsvpTeObjectParsingError::InvalidPrefixLength(prefix_len),
                    ))
                })?;
                subobjects.push(RouteSubobject::Ipv4Prefix {
                    loose,
                    prefix,
                    attributes,
                });
            }
            RouteSubobject::TYPE_IPV6_PREFIX => {
                let (body, address) = be_u128(body)?;
                let (body, prefix_len) = be_u8(body)?;
                let (_, attributes) = be_u8(body)?;
                let prefix = Ipv6Net::new(Ipv6Addr::from(address), prefix_len).map_err(|_| {
                    nom::Err::Error(LocatedRsvpTeObjectParsingError::new(
                        input,
                        RsvpTeObjectParsingError::InvalidPrefixLength(prefix_len),
                    ))
                })?;
                subobjects.push(RouteSubobject::Ipv6Prefix {
                    loose,
                    prefix,
                    attributes,
                });
            }
            RouteSubobject::TYPE_LABEL => {
                let (body, flags) = be_u8(body)?;
                let (body, c_type) = be_u8(body)?;
                let (_, label) = be_u32(body)?;
                subobjects.push(RouteSubobject::Label {
                    loose,
                    flags,
                    c_type,
                    label,
                });
            }
            RouteSubobject::TYPE_UNNUMBERED_INTERFACE => {
                let (body, attributes) = be_u8(body)?;
                let (body, _reserved) = be_u8(body)?;
                let (body, router_id) = be_u32(body)?;
                let (_, interface_id) = be_u32(body)?;
                subobjects.push(RouteSubobject::UnnumberedInterface {
                    loose,
                    attributes,
                    router_id: Ipv4Addr::from(router_id),
                    interface_id,
                });
            }
            RouteSubobject::TYPE_AS_NUMBER => {
                let (_, asn) = be_u16(body)?;
                subobjects.push(RouteSubobject::AsNumber { loose, asn });
            }
            RouteSubobject::TYPE_SRLG => {
                let (body, srlg_id) = be_u32(body)?;
                let (body, _reserved) = be_u8(body)?;
                let (_, attributes) = be_u8(body)?;
                subobjects.push(RouteSubobject::Srlg {
                    loose,
                    srlg_id,
                    attributes,
                });
            }
            RouteSubobject::TYPE_PROTECTION => {
                let (body, _reserved) = be_u8(body)?;
                let (body, c_type) = be_u8(body)?;
                let (_, protection) = parse_protection_body(body, c_type)?;
                subobjects.push(RouteSubobject::Protection {
                    loose,
                    body: protection,
                });
            }
            other => {
                debug!("skipping route subobject with unsupported type {other}");
            }
        }
        buf = remainder;
    }
    Ok((buf, subobjects))
}

pub fn parse_explicit_route(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_route_subobjects(buf)?;
    Ok((
        buf,
        RsvpTeObject::ExplicitRoute(ExplicitRouteObject { subobjects }),
    ))
}

pub fn parse_record_route(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_route_subobjects(buf)?;
    Ok((
        buf,
        RsvpTeObject::RecordRoute(RecordRouteObject { subobjects }),
    ))
}

pub fn parse_exclude_route(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_route_subobjects(buf)?;
    Ok((
        buf,
        RsvpTeObject::ExcludeRoute(ExcludeRouteObject { subobjects }),
    ))
}

pub fn parse_primary_path_route(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_route_subobjects(buf)?;
    Ok((
        buf,
        RsvpTeObject::PrimaryPathRoute(PrimaryPathRouteObject { subobjects }),
    ))
}

pub fn parse_secondary_explicit_route(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_route_subobjects(buf)?;
    Ok((
        buf,
        RsvpTeObject::SecondaryExplicitRoute(SecondaryExplicitRouteObject { subobjects }),
    ))
}

pub fn parse_secondary_record_route(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_route_subobjects(buf)?;
    Ok((
        buf,
        RsvpTeObject::SecondaryRecordRoute(SecondaryRecordRouteObject { subobjects }),
    ))
}

pub fn parse_fast_reroute_type1(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, setup_priority) = be_u8(buf)?;
    let (buf, holding_priority) = be_u8(buf)?;
    let (buf, hop_limit) = be_u8(buf)?;
    let (buf, flags) = be_u8(buf)?;
    let (buf, bandwidth) = be_f32(buf)?;
    let (buf, include_any) = be_u32(buf)?;
    let (buf, exclude_any) = be_u32(buf)?;
    let (buf, include_all) = be_u32(buf)?;
    Ok((
        buf,
        RsvpTeObject::FastReroute(FastRerouteObject::Type1 {
            setup_priority,
            holding_priority,
            hop_limit,
            flags,
            bandwidth,
            include_any,
            exclude_any,
            include_all,
        }),
    ))
}

pub fn parse_fast_reroute_legacy(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, setup_priority) = be_u8(buf)?;
    let (buf, holding_priority) = be_u8(buf)?;
    let (buf, hop_limit) = be_u8(buf)?;
    let (buf, _reserved) = be_u8(buf)?;
    let (buf, bandwidth) = be_f32(buf)?;
    let (buf, include_any) = be_u32(buf)?;
    let (buf, exclude_any) = be_u32(buf)?;
    Ok((
        buf,
        RsvpTeObject::FastReroute(FastRerouteObject::Legacy {
            setup_priority,
            holding_priority,
            hop_limit,
            bandwidth,
            include_any,
            exclude_any,
        }),
    ))
}

pub fn parse_detour_ipv4(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let mut buf = buf;
    let mut entries = Vec::new();
    while !buf.is_empty() {
        let (span, plr_id) = be_u32(buf)?;
        let (span, avoid_node_id) = be_u32(span)?;
        entries.push(DetourEntry {
            plr_id: Ipv4Addr::from(plr_id),
            avoid_node_id: Ipv4Addr::from(avoid_node_id),
        });
        buf = span;
    }
    Ok((buf, RsvpTeObject::Detour(DetourObject::Ipv4(entries))))
}

pub fn parse_detour_ipv6(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let mut buf = buf;
    let mut entries = Vec::new();
    while !buf.is_empty() {
        let (span, plr_id) = be_u128(buf)?;
        let (span, avoid_node_id) = be_u128(span)?;
        entries.push(DetourEntry {
            plr_id: Ipv6Addr::from(plr_id),
            avoid_node_id: Ipv6Addr::from(avoid_node_id),
        });
        buf = span;
    }
    Ok((buf, RsvpTeObject::Detour(DetourObject::Ipv6(entries))))
}

/// Inner TLVs of the LSP-Attributes objects: value lengths are exact, the
/// wire pads values to a 4-octet boundary
fn parse_attributes_subtlvs(
    buf: Span<'_>,
) -> IResult<Span<'_>, Vec<AttributesSubTlv>, LocatedRsvpTeObjectParsingError<'_>> {
    let mut buf = buf;
    let mut subobjects = Vec::new();
    while !buf.is_empty() {
        let (span, code) = be_u16(buf)?;
        let (span, length) = be_u16(span)?;
        let (span, value) = nom::bytes::complete::take(length)(span)?;
        let padding = (4 - length % 4) % 4;
        let (span, _padding) = nom::bytes::complete::take(padding)(span)?;
        subobjects.push(AttributesSubTlv {
            code,
            value: value.to_vec(),
        });
        buf = span;
    }
    Ok((buf, subobjects))
}

pub fn parse_lsp_attributes(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_attributes_subtlvs(buf)?;
    Ok((
        buf,
        RsvpTeObject::LspAttributes(LspAttributesObject { subobjects }),
    ))
}

pub fn parse_lsp_required_attributes(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, subobjects) = parse_attributes_subtlvs(buf)?;
    Ok((
        buf,
        RsvpTeObject::LspRequiredAttributes(LspRequiredAttributesObject { subobjects }),
    ))
}

pub fn parse_association_ipv4(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, association_type) = be_u16(buf)?;
    let (buf, association_id) = be_u16(buf)?;
    let (buf, source) = be_u32(buf)?;
    Ok((
        buf,
        RsvpTeObject::Association(AssociationObject::Ipv4 {
            association_type,
            association_id,
            source: Ipv4Addr::from(source),
        }),
    ))
}

pub fn parse_association_ipv6(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, association_type) = be_u16(buf)?;
    let (buf, association_id) = be_u16(buf)?;
    let (buf, source) = be_u128(buf)?;
    Ok((
        buf,
        RsvpTeObject::Association(AssociationObject::Ipv6 {
            association_type,
            association_id,
            source: Ipv6Addr::from(source),
        }),
    ))
}

pub fn parse_admin_status(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, flags) = be_u8(buf)?;
    let (buf, _reserved) = be_u16(buf)?;
    let (buf, status) = be_u8(buf)?;
    Ok((
        buf,
        RsvpTeObject::AdminStatus(AdminStatusObject {
            reflect: flags & 0x80 == 0x80,
            testing: status & 0x04 == 0x04,
            administratively_down: status & 0x02 == 0x02,
            deleting: status & 0x01 == 0x01,
        }),
    ))
}

pub fn parse_bandwidth_basic(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, bandwidth) = be_f32(buf)?;
    Ok((buf, RsvpTeObject::Bandwidth(BandwidthObject::Basic(bandwidth))))
}

pub fn parse_bandwidth_reoptimization(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, bandwidth) = be_f32(buf)?;
    Ok((
        buf,
        RsvpTeObject::Bandwidth(BandwidthObject::Reoptimization(bandwidth)),
    ))
}

pub fn parse_metric(
    buf: Span<'_>,
) -> IResult<Span<'_>, RsvpTeObject, LocatedRsvpTeObjectParsingError<'_>> {
    let (buf, _reserved) = be_u16(buf)?;
    let (buf, flags) = be_u8(buf)?;
    let (buf, metric_type) = be_u8(buf)?;
    let (buf, value) = be_u32(buf)?;
    Ok((
        buf,
        RsvpTeObject::Metric(MetricObject {
            bound: flags & 0x01 == 0x01,
            computed: flags & 0x02 == 0x02,
            metric_type,
            value,
        }),
    ))
}
