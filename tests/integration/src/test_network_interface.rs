//! Network interface encoding and decoding integration tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ec2wire_model::input::{
        DescribeNetworkInterfacesRequest, NetworkInterfaceCollection,
        NetworkInterfaceSpecification, PrivateIpAddressSpec,
    };
    use ec2wire_model::{Ec2Action, Ec2Response};
    use ec2wire_query::EncodeError;

    use crate::{decode, expected, request_params};

    const DESCRIBE_NETWORK_INTERFACES: &[u8] = br#"
<DescribeNetworkInterfacesResponse xmlns="http://ec2.amazonaws.com/doc/2014-10-01/">
  <requestId>47c6a494-08a9-47d9-89e3-884bb87a2130</requestId>
  <networkInterfaceSet>
    <item>
      <networkInterfaceId>eni-5d22cec4</networkInterfaceId>
      <subnetId>subnet-e8a8b6b5</subnetId>
      <vpcId>vpc-a894d1d3</vpcId>
      <availabilityZone>us-east-1a</availabilityZone>
      <description>Primary network interface</description>
      <status>in-use</status>
      <macAddress>0e:bc:c1:69:7d:7a</macAddress>
      <privateIpAddress>172.10.10.217</privateIpAddress>
      <sourceDestCheck>true</sourceDestCheck>
      <attachment>
        <attachmentId>eni-attach-e878d8f0</attachmentId>
        <instanceId>i-00f2f9ed1bbd6b2a2</instanceId>
        <deviceIndex>0</deviceIndex>
        <status>attached</status>
        <deleteOnTermination>true</deleteOnTermination>
      </attachment>
      <association>
        <publicIp>18.208.84.240</publicIp>
        <publicDnsName/>
        <allocationId>eipalloc-9e2ad396</allocationId>
        <associationId>eipassoc-970f913c</associationId>
      </association>
      <tagSet/>
      <privateIpAddressesSet>
        <item>
          <privateIpAddress>172.10.10.217</privateIpAddress>
          <primary>true</primary>
          <association>
            <publicIp>18.208.84.240</publicIp>
            <publicDnsName/>
            <allocationId>eipalloc-9e2ad396</allocationId>
            <associationId>eipassoc-970f913c</associationId>
          </association>
        </item>
        <item>
          <privateIpAddress>172.10.10.218</privateIpAddress>
          <privateDnsName/>
          <primary>false</primary>
          <association>
            <publicIp>18.210.215.25</publicIp>
            <publicDnsName/>
            <allocationId>eipalloc-e0ded8e8</allocationId>
            <associationId>eipassoc-a4005b0f</associationId>
          </association>
        </item>
      </privateIpAddressesSet>
    </item>
  </networkInterfaceSet>
</DescribeNetworkInterfacesResponse>"#;

    fn spec1() -> NetworkInterfaceSpecification {
        NetworkInterfaceSpecification {
            device_index: Some(1),
            subnet_id: Some("subnet_id".to_owned()),
            description: Some("description1".to_owned()),
            private_ip_address: Some("10.0.0.54".to_owned()),
            delete_on_termination: Some(false),
            private_ip_addresses: vec![
                PrivateIpAddressSpec::new("10.0.0.10", false),
                PrivateIpAddressSpec::new("10.0.0.11", false),
            ],
            ..NetworkInterfaceSpecification::default()
        }
    }

    fn spec2() -> NetworkInterfaceSpecification {
        NetworkInterfaceSpecification {
            device_index: Some(2),
            subnet_id: Some("subnet_id2".to_owned()),
            description: Some("description2".to_owned()),
            security_group_ids: vec!["group_id1".to_owned(), "group_id2".to_owned()],
            private_ip_address: Some("10.0.1.54".to_owned()),
            delete_on_termination: Some(false),
            private_ip_addresses: vec![
                PrivateIpAddressSpec::new("10.0.1.10", false),
                PrivateIpAddressSpec::new("10.0.1.11", false),
            ],
            ..NetworkInterfaceSpecification::default()
        }
    }

    fn spec3() -> NetworkInterfaceSpecification {
        NetworkInterfaceSpecification {
            device_index: Some(0),
            associate_public_ip_address: Some(true),
            ..spec2()
        }
    }

    fn spec4() -> NetworkInterfaceSpecification {
        NetworkInterfaceSpecification {
            device_index: Some(4),
            switch_id: Some("switch_id4".to_owned()),
            description: Some("description4".to_owned()),
            delete_on_termination: Some(true),
            ..NetworkInterfaceSpecification::default()
        }
    }

    fn collection(specs: Vec<NetworkInterfaceSpecification>) -> NetworkInterfaceCollection {
        NetworkInterfaceCollection::from(specs)
    }

    fn serialization_keys(prefix: &str) -> Vec<(String, String)> {
        [
            ("NetworkInterface.0.DeviceIndex", "1"),
            ("NetworkInterface.0.DeleteOnTermination", "false"),
            ("NetworkInterface.0.Description", "description1"),
            ("NetworkInterface.0.PrivateIpAddress", "10.0.0.54"),
            ("NetworkInterface.0.SubnetId", "subnet_id"),
            ("NetworkInterface.0.PrivateIpAddresses.0.Primary", "false"),
            ("NetworkInterface.0.PrivateIpAddresses.0.PrivateIpAddress", "10.0.0.10"),
            ("NetworkInterface.0.PrivateIpAddresses.1.Primary", "false"),
            ("NetworkInterface.0.PrivateIpAddresses.1.PrivateIpAddress", "10.0.0.11"),
            ("NetworkInterface.1.DeviceIndex", "2"),
            ("NetworkInterface.1.Description", "description2"),
            ("NetworkInterface.1.DeleteOnTermination", "false"),
            ("NetworkInterface.1.PrivateIpAddress", "10.0.1.54"),
            ("NetworkInterface.1.SubnetId", "subnet_id2"),
            ("NetworkInterface.1.SecurityGroupId.0", "group_id1"),
            ("NetworkInterface.1.SecurityGroupId.1", "group_id2"),
            ("NetworkInterface.1.PrivateIpAddresses.0.Primary", "false"),
            ("NetworkInterface.1.PrivateIpAddresses.0.PrivateIpAddress", "10.0.1.10"),
            ("NetworkInterface.1.PrivateIpAddresses.1.Primary", "false"),
            ("NetworkInterface.1.PrivateIpAddresses.1.PrivateIpAddress", "10.0.1.11"),
            ("NetworkInterface.2.DeviceIndex", "4"),
            ("NetworkInterface.2.SwitchId", "switch_id4"),
            ("NetworkInterface.2.Description", "description4"),
            ("NetworkInterface.2.DeleteOnTermination", "true"),
        ]
        .iter()
        .map(|(k, v)| (format!("{prefix}{k}"), (*v).to_owned()))
        .collect()
    }

    #[test]
    fn test_should_serialize_interface_list() {
        let params = collection(vec![spec1(), spec2(), spec4()])
            .build_list_params(None)
            .expect("encode should succeed");

        assert_eq!(
            params.into_inner(),
            serialization_keys("").into_iter().collect::<BTreeMap<_, _>>()
        );
    }

    #[test]
    fn test_should_add_prefix_to_serialization() {
        let params = collection(vec![spec1(), spec2(), spec4()])
            .build_list_params(Some("LaunchSpecification."))
            .expect("encode should succeed");

        assert_eq!(
            params.into_inner(),
            serialization_keys("LaunchSpecification.")
                .into_iter()
                .collect::<BTreeMap<_, _>>()
        );
    }

    #[test]
    fn test_should_encode_public_ip_on_first_device() {
        let params = collection(vec![spec3()])
            .build_list_params(Some("LaunchSpecification"))
            .expect("encode should succeed");

        let p = "LaunchSpecification.NetworkInterface.0";
        assert_eq!(
            params.into_inner(),
            [
                (format!("{p}.AssociatePublicIpAddress"), "true"),
                (format!("{p}.DeviceIndex"), "0"),
                (format!("{p}.DeleteOnTermination"), "false"),
                (format!("{p}.Description"), "description2"),
                (format!("{p}.PrivateIpAddress"), "10.0.1.54"),
                (format!("{p}.SubnetId"), "subnet_id2"),
                (format!("{p}.PrivateIpAddresses.0.Primary"), "false"),
                (format!("{p}.PrivateIpAddresses.0.PrivateIpAddress"), "10.0.1.10"),
                (format!("{p}.PrivateIpAddresses.1.Primary"), "false"),
                (format!("{p}.PrivateIpAddresses.1.PrivateIpAddress"), "10.0.1.11"),
                (format!("{p}.SecurityGroupId.0"), "group_id1"),
                (format!("{p}.SecurityGroupId.1"), "group_id2"),
            ]
            .into_iter()
            .map(|(k, v)| (k, v.to_owned()))
            .collect::<BTreeMap<_, _>>()
        );
    }

    #[test]
    fn test_should_reject_two_public_ip_requests() {
        let mut second = spec3();
        second.device_index = Some(1);

        let err = collection(vec![spec3(), second])
            .build_list_params(Some("LaunchSpecification."))
            .expect_err("two public address requests must fail");

        assert!(matches!(err, EncodeError::ClientValidation(_)));
    }

    #[test]
    fn test_should_reject_public_ip_away_from_first_device() {
        let mut moved = spec3();
        moved.device_index = Some(1);
        let err = collection(vec![moved])
            .build_list_params(Some("LaunchSpecification."))
            .expect_err("device index 1 must fail");
        assert!(matches!(err, EncodeError::ClientValidation(_)));

        let err = collection(vec![spec1(), spec3()])
            .build_list_params(None)
            .expect_err("second position must fail");
        assert!(matches!(err, EncodeError::ClientValidation(_)));
    }

    #[test]
    fn test_should_reject_public_ip_with_other_interfaces() {
        let err = collection(vec![spec3(), spec1()])
            .build_list_params(Some("LaunchSpecification."))
            .expect_err("public address next to another interface must fail");

        assert!(matches!(err, EncodeError::ClientValidation(_)));
    }

    #[test]
    fn test_should_describe_network_interfaces() {
        let request = DescribeNetworkInterfacesRequest {
            network_interface_ids: vec!["eni-5d22cec4".to_owned()],
            ..Default::default()
        };
        assert_eq!(
            request_params(&request),
            expected(&[
                ("Action", "DescribeNetworkInterfaces"),
                ("NetworkInterfaceId.1", "eni-5d22cec4"),
            ])
        );

        let interfaces =
            match decode(Ec2Action::DescribeNetworkInterfaces, DESCRIBE_NETWORK_INTERFACES) {
                Ec2Response::NetworkInterfaces(interfaces) => interfaces,
                other => panic!("expected network interfaces, got {other:?}"),
            };

        assert_eq!(
            interfaces.request_id.as_deref(),
            Some("47c6a494-08a9-47d9-89e3-884bb87a2130")
        );
        assert_eq!(interfaces.len(), 1);

        let eni = &interfaces[0];
        assert_eq!(eni.id.as_deref(), Some("eni-5d22cec4"));
        assert_eq!(eni.status.as_deref(), Some("in-use"));
        assert_eq!(eni.source_dest_check, Some(true));
        assert!(eni.tags.is_empty());
        assert!(eni.extra.is_empty(), "unexpected extras: {:?}", eni.extra);

        let attachment = eni.attachment.as_ref().expect("attachment");
        assert_eq!(attachment.id.as_deref(), Some("eni-attach-e878d8f0"));
        assert_eq!(attachment.device_index, Some(0));
        assert_eq!(attachment.delete_on_termination, Some(true));

        let association = eni.association.as_ref().expect("association");
        assert_eq!(association.id.as_deref(), Some("eipassoc-970f913c"));
        assert_eq!(association.public_ip.as_deref(), Some("18.208.84.240"));

        assert_eq!(eni.private_ip_addresses.len(), 2);
        let secondary = &eni.private_ip_addresses[1];
        assert_eq!(secondary.private_ip_address.as_deref(), Some("172.10.10.218"));
        assert_eq!(secondary.primary, Some(false));
        let association = secondary.association.as_ref().expect("association");
        assert_eq!(association.allocation_id.as_deref(), Some("eipalloc-e0ded8e8"));
        assert_eq!(association.id.as_deref(), Some("eipassoc-a4005b0f"));
    }
}
