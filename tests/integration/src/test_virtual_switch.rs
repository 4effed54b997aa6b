//! Virtual switch integration tests.

#[cfg(test)]
mod tests {
    use ec2wire_model::input::{
        CreateVirtualSwitchRequest, DeleteVirtualSwitchRequest, DescribeVirtualSwitchesRequest,
        SwitchRef,
    };
    use ec2wire_model::{Ec2Action, Ec2Response};

    use crate::{decode, expected, request_params};

    const DESCRIBE_VIRTUAL_SWITCH: &[u8] = br"
<DescribeVirtualSwitchesResponse>
    <virtualSwitchInfo>
        <item>
            <switchId>sw-XXXXXXXX</switchId>
            <switchName>switch-name</switchName>
        </item>
    </virtualSwitchInfo>
    <requestId>7cd01b5e-b105-46ec-a9d5-6d2dee1910f3</requestId>
    <ResponseMetadata>
        <RequestId>7cd01b5e-b105-46ec-a9d5-6d2dee1910f3</RequestId>
    </ResponseMetadata>
</DescribeVirtualSwitchesResponse>";

    #[test]
    fn test_should_describe_virtual_switches() {
        let request = DescribeVirtualSwitchesRequest {
            switch_ids: vec!["sw-XXXXXXXX".to_owned()],
            ..Default::default()
        };
        assert_eq!(
            request_params(&request),
            expected(&[
                ("Action", "DescribeVirtualSwitches"),
                ("SwitchId.1", "sw-XXXXXXXX"),
            ])
        );

        let switches = match decode(Ec2Action::DescribeVirtualSwitches, DESCRIBE_VIRTUAL_SWITCH) {
            Ec2Response::VirtualSwitches(switches) => switches,
            other => panic!("expected virtual switches, got {other:?}"),
        };

        assert_eq!(switches.len(), 1);
        assert_eq!(switches[0].id.as_deref(), Some("sw-XXXXXXXX"));
        assert_eq!(switches[0].name.as_deref(), Some("switch-name"));
        assert!(switches[0].tags.is_empty());
        assert!(switches[0].extra.is_empty());
    }

    #[test]
    fn test_should_create_virtual_switch() {
        let request = CreateVirtualSwitchRequest {
            switch_name: "switch-name".to_owned(),
            dry_run: false,
        };
        assert_eq!(
            request_params(&request),
            expected(&[("Action", "CreateVirtualSwitch"), ("SwitchName", "switch-name")])
        );

        let xml = b"<CreateVirtualSwitchResponse>
            <virtualSwitch>
                <switchId>sw-new</switchId>
                <switchName>switch-name</switchName>
                <tagSet>
                    <item><key>env</key><value>test</value></item>
                </tagSet>
            </virtualSwitch>
        </CreateVirtualSwitchResponse>";

        let switch = match decode(Ec2Action::CreateVirtualSwitch, xml) {
            Ec2Response::VirtualSwitch(switch) => switch,
            other => panic!("expected a virtual switch, got {other:?}"),
        };

        assert_eq!(switch.id.as_deref(), Some("sw-new"));
        assert_eq!(switch.tags.get("env"), Some("test"));
    }

    #[test]
    fn test_should_delete_virtual_switch_by_name() {
        let request = DeleteVirtualSwitchRequest {
            switch: SwitchRef::Name("switch-name".to_owned()),
            dry_run: false,
        };
        assert_eq!(
            request_params(&request),
            expected(&[("Action", "DeleteVirtualSwitch"), ("SwitchName", "switch-name")])
        );

        let xml = b"<DeleteVirtualSwitchResponse><return>false</return></DeleteVirtualSwitchResponse>";
        match decode(Ec2Action::DeleteVirtualSwitch, xml) {
            Ec2Response::Status(status) => assert!(!status.succeeded()),
            other => panic!("expected a status response, got {other:?}"),
        }
    }
}
