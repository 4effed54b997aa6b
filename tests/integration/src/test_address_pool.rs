//! Public address pool and BYOIP integration tests.

#[cfg(test)]
mod tests {
    use ec2wire_model::input::{
        DeprovisionByoipCidrRequest, DescribePublicIpv4PoolsRequest, ProvisionByoipCidrRequest,
    };
    use ec2wire_model::output::ByoipCidr;
    use ec2wire_model::{Ec2Action, Ec2Response};

    use crate::{decode, expected, request_params};

    const DESCRIBE_PUBLIC_IPV4_POOLS: &[u8] = br"<DescribePublicIpv4PoolsResponse>
  <publicIpv4PoolSet>
    <item>
      <poolAddressRangeSet>
        <item>
          <addressCount>256</addressCount>
          <lastAddress>7.0.0.255</lastAddress>
          <availableAddressCount>247</availableAddressCount>
          <firstAddress>7.0.0.0</firstAddress>
        </item>
        <item>
          <addressCount>256</addressCount>
          <lastAddress>9.16.0.255</lastAddress>
          <availableAddressCount>256</availableAddressCount>
          <firstAddress>9.16.0.0</firstAddress>
        </item>
        <item>
          <addressCount>256</addressCount>
          <lastAddress>9.17.0.255</lastAddress>
          <availableAddressCount>256</availableAddressCount>
          <firstAddress>9.17.0.0</firstAddress>
        </item>
      </poolAddressRangeSet>
      <totalAvailableAddressCount>759</totalAvailableAddressCount>
      <totalAddressCount>768</totalAddressCount>
      <description/>
      <poolId>ipv4pool-ec2-4E58D35D</poolId>
    </item>
  </publicIpv4PoolSet>
  <requestId>b04344fb-e4c0-4b1b-b69c-4dbc1979f413</requestId>
  <ResponseMetadata>
    <RequestId>b04344fb-e4c0-4b1b-b69c-4dbc1979f413</RequestId>
  </ResponseMetadata>
</DescribePublicIpv4PoolsResponse>";

    const DESCRIBE_BYOIP_CIDRS: &[u8] = br"<DescribeByoipCidrsResponse>
  <byoipCidrSet>
    <item>
      <cidr>7.0.0.0/24</cidr>
      <description>7.0.0.0/24 PI block belonging to some user</description>
      <statusMessage/>
      <state>advertised</state>
    </item>
    <item>
      <cidr>9.16.0.0/24</cidr>
      <description>blabla</description>
      <statusMessage/>
      <state>advertised</state>
    </item>
    <item>
      <cidr>9.17.0.0/24</cidr>
      <description>blabla</description>
      <statusMessage/>
      <state>advertised</state>
    </item>
  </byoipCidrSet>
  <requestId>c9ab43f0-b6e9-4aed-97d2-42802109da9a</requestId>
  <ResponseMetadata>
    <RequestId>c9ab43f0-b6e9-4aed-97d2-42802109da9a</RequestId>
  </ResponseMetadata>Des
</DescribeByoipCidrsResponse>";

    fn byoip_response(root: &str, state: &str) -> Vec<u8> {
        format!(
            "<{root}>
  <byoipCidr>
    <cidr>123.3.0.0/23</cidr>
    <description>123.3.0.0/23 PI block belonging to some user</description>
    <statusMessage/>
    <state>{state}</state>
  </byoipCidr>
  <requestId>4d39d116-5b2e-42f2-bf57-fbcf827c0853</requestId>
  <ResponseMetadata>
    <RequestId>4d39d116-5b2e-42f2-bf57-fbcf827c0853</RequestId>
  </ResponseMetadata>
</{root}>"
        )
        .into_bytes()
    }

    fn single_cidr(response: Ec2Response) -> ByoipCidr {
        match response {
            Ec2Response::ByoipCidr(cidr) => cidr,
            other => panic!("expected a single cidr, got {other:?}"),
        }
    }

    #[test]
    fn test_should_describe_public_ipv4_pools() {
        let pools = match decode(Ec2Action::DescribePublicIpv4Pools, DESCRIBE_PUBLIC_IPV4_POOLS) {
            Ec2Response::AddressPools(pools) => pools,
            other => panic!("expected address pools, got {other:?}"),
        };

        assert_eq!(pools.len(), 1);
        assert_eq!(
            pools.request_id.as_deref(),
            Some("b04344fb-e4c0-4b1b-b69c-4dbc1979f413")
        );

        let pool = &pools[0];
        assert_eq!(pool.id.as_deref(), Some("ipv4pool-ec2-4E58D35D"));
        assert_eq!(pool.description.as_deref(), Some(""));
        assert_eq!(pool.total_available_address_count, Some(759));
        assert_eq!(pool.total_address_count, Some(768));
        assert!(pool.extra.is_empty(), "unexpected extras: {:?}", pool.extra);

        assert_eq!(pool.pool_address_ranges.len(), 3);
        let first = &pool.pool_address_ranges[0];
        assert_eq!(first.first_address.as_deref(), Some("7.0.0.0"));
        assert_eq!(first.last_address.as_deref(), Some("7.0.0.255"));
        assert_eq!(first.address_count, Some(256));
        assert_eq!(first.available_address_count, Some(247));
        let last = &pool.pool_address_ranges[2];
        assert_eq!(last.first_address.as_deref(), Some("9.17.0.0"));
        assert_eq!(last.available_address_count, Some(256));
    }

    #[test]
    fn test_should_describe_byoip_cidrs_despite_stray_text() {
        let cidrs = match decode(Ec2Action::DescribeByoipCidrs, DESCRIBE_BYOIP_CIDRS) {
            Ec2Response::ByoipCidrs(cidrs) => cidrs,
            other => panic!("expected byoip cidrs, got {other:?}"),
        };

        let ids: Vec<_> = cidrs.iter().filter_map(ByoipCidr::id).collect();
        assert_eq!(ids, ["7.0.0.0/24", "9.16.0.0/24", "9.17.0.0/24"]);
        for cidr in cidrs.iter() {
            assert_eq!(cidr.state.as_deref(), Some("advertised"));
            assert_eq!(cidr.status_message.as_deref(), Some(""));
        }
        assert_eq!(
            cidrs.request_id.as_deref(),
            Some("c9ab43f0-b6e9-4aed-97d2-42802109da9a")
        );
    }

    #[test]
    fn test_should_provision_byoip_cidr() {
        let request = ProvisionByoipCidrRequest::new("123.3.0.0/23");
        assert_eq!(
            request_params(&request),
            expected(&[("Action", "ProvisionByoipCidr"), ("Cidr", "123.3.0.0/23")])
        );

        let xml = byoip_response("ProvisionByoipCidrResponse", "pending-provision");
        let cidr = single_cidr(decode(Ec2Action::ProvisionByoipCidr, &xml));

        assert_eq!(cidr.id(), Some("123.3.0.0/23"));
        assert_eq!(
            cidr.description.as_deref(),
            Some("123.3.0.0/23 PI block belonging to some user")
        );
        assert_eq!(cidr.state.as_deref(), Some("pending-provision"));
    }

    #[test]
    fn test_should_deprovision_byoip_cidr() {
        let request = DeprovisionByoipCidrRequest {
            cidr: "123.3.0.0/23".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            request_params(&request),
            expected(&[("Action", "DeprovisionByoipCidr"), ("Cidr", "123.3.0.0/23")])
        );

        let xml = byoip_response("DeprovisionByoipCidrResponse", "pending-deprovision");
        let cidr = single_cidr(decode(Ec2Action::DeprovisionByoipCidr, &xml));

        assert_eq!(cidr.id(), Some("123.3.0.0/23"));
        assert_eq!(cidr.state.as_deref(), Some("pending-deprovision"));
    }

    #[test]
    fn test_should_list_requested_pools_one_based() {
        let request = DescribePublicIpv4PoolsRequest {
            pool_ids: vec!["pool-a".to_owned(), "pool-b".to_owned()],
            max_results: Some(10),
            ..Default::default()
        };

        assert_eq!(
            request_params(&request),
            expected(&[
                ("Action", "DescribePublicIpv4Pools"),
                ("MaxResults", "10"),
                ("PoolId.1", "pool-a"),
                ("PoolId.2", "pool-b"),
            ])
        );
    }
}
