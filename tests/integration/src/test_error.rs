//! Malformed input, value errors and forward compatibility.

#[cfg(test)]
mod tests {
    use ec2wire_model::{Ec2Action, Ec2Response};
    use ec2wire_xml::{DecodeError, DecoderConfig};

    use crate::decode;

    #[test]
    fn test_should_reject_mismatched_tags() {
        let err = Ec2Response::decode(
            Ec2Action::DescribeVirtualSwitches,
            b"<DescribeVirtualSwitchesResponse><virtualSwitchInfo></DescribeVirtualSwitchesResponse>",
        )
        .expect_err("mismatched tags must fail");

        assert!(matches!(err, DecodeError::MalformedDocument(_)));
    }

    #[test]
    fn test_should_reject_truncated_document() {
        let err = Ec2Response::decode(
            Ec2Action::DescribeByoipCidrs,
            b"<DescribeByoipCidrsResponse><byoipCidrSet><item><cidr>7.0.0.0/24",
        )
        .expect_err("truncated document must fail");

        assert!(matches!(err, DecodeError::MalformedDocument(_)));
    }

    #[test]
    fn test_should_reject_empty_body() {
        let err = Ec2Response::decode(Ec2Action::CancelExportTask, b"   ")
            .expect_err("empty body must fail");

        assert!(matches!(err, DecodeError::MalformedDocument(_)));
    }

    #[test]
    fn test_should_report_non_numeric_count() {
        let xml = b"<DescribePublicIpv4PoolsResponse>
            <publicIpv4PoolSet>
                <item><totalAddressCount>many</totalAddressCount></item>
            </publicIpv4PoolSet>
        </DescribePublicIpv4PoolsResponse>";

        let err = Ec2Response::decode(Ec2Action::DescribePublicIpv4Pools, xml)
            .expect_err("non numeric count must fail");

        match err {
            DecodeError::UnexpectedValue { field, value, .. } => {
                assert_eq!(field, "totalAddressCount");
                assert_eq!(value, "many");
            }
            other => panic!("expected an unexpected value error, got {other:?}"),
        }
    }

    #[test]
    fn test_should_keep_unknown_fields_of_entities() {
        let xml = b"<DescribeByoipCidrsResponse>
            <byoipCidrSet>
                <item>
                    <cidr>7.0.0.0/24</cidr>
                    <state>advertised</state>
                    <asn>65001</asn>
                    <origin><region>ru-msk</region></origin>
                </item>
            </byoipCidrSet>
        </DescribeByoipCidrsResponse>";

        let cidrs = match decode(Ec2Action::DescribeByoipCidrs, xml) {
            Ec2Response::ByoipCidrs(cidrs) => cidrs,
            other => panic!("expected byoip cidrs, got {other:?}"),
        };

        let extra = &cidrs[0].extra;
        assert_eq!(extra.get("asn"), Some("65001"));
        assert_eq!(extra.get("region"), Some("ru-msk"));
        assert!(!extra.contains("origin"));
        assert_eq!(extra.len(), 2);
    }

    #[test]
    fn test_should_decode_unmodelled_action_generically() {
        let xml = b"<RunInstancesResponse>
            <requestId>r-run</requestId>
            <reservationId>r-1234</reservationId>
            <ownerId>111122223333</ownerId>
        </RunInstancesResponse>";

        let generic = match decode(Ec2Action::RunInstances, xml) {
            Ec2Response::Generic(generic) => generic,
            other => panic!("expected a generic response, got {other:?}"),
        };

        assert_eq!(generic.request_id.as_deref(), Some("r-run"));
        assert_eq!(generic.fields.get("reservationId"), Some("r-1234"));
        assert_eq!(generic.fields.get("ownerId"), Some("111122223333"));
    }

    #[test]
    fn test_should_honor_decoder_config() {
        let xml = b"<DeleteVirtualSwitchResponse><wrap><return>true</return></wrap></DeleteVirtualSwitchResponse>";
        let config = DecoderConfig::default().with_max_depth(2);

        let err = Ec2Response::decode_with(Ec2Action::DeleteVirtualSwitch, xml, &config)
            .expect_err("depth limit must fail");
        assert!(matches!(err, DecodeError::DepthExceeded(2)));

        let untrimmed = DecoderConfig {
            trim_text: false,
            ..DecoderConfig::default()
        };
        let response = Ec2Response::decode_with(
            Ec2Action::RunInstances,
            b"<RunInstancesResponse><note>  padded  </note></RunInstancesResponse>",
            &untrimmed,
        )
        .expect("decode should succeed");
        match response {
            Ec2Response::Generic(generic) => {
                assert_eq!(generic.fields.get("note"), Some("  padded  "));
            }
            other => panic!("expected a generic response, got {other:?}"),
        }
    }

    #[test]
    fn test_should_serialize_decoded_graph_as_json() {
        let xml = b"<DescribeVirtualSwitchesResponse>
            <virtualSwitchInfo>
                <item><switchId>sw-1</switchId><switchName>edge</switchName></item>
            </virtualSwitchInfo>
            <requestId>r-json</requestId>
        </DescribeVirtualSwitchesResponse>";

        let json = serde_json::to_value(decode(Ec2Action::DescribeVirtualSwitches, xml))
            .expect("serialize should succeed");

        assert_eq!(json["request_id"], "r-json");
        assert_eq!(json["items"][0]["id"], "sw-1");
        assert_eq!(json["items"][0]["name"], "edge");
    }
}
