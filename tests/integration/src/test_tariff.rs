//! Tariff integration tests.

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ec2wire_model::input::DescribeTariffsRequest;
    use ec2wire_model::{Ec2Action, Ec2Response};
    use rust_decimal::Decimal;

    use crate::{decode, expected, request_params};

    const DESCRIBE_TARIFFS: &[u8] = b"<DescribeTariffsResponse>
  <requestId>t-1</requestId>
  <tariffs>
    <item>
      <name>default</name>
      <currency>RUB</currency>
      <instances>
        <item>
          <name>m5.large</name>
          <cpu>2</cpu>
          <ccus>0.5</ccus>
          <memory>8192</memory>
          <services>
            <item>
              <name>instance</name>
              <measure>hour</measure>
              <rates>
                <item><price>3.1415</price><availability_zone>ru-msk-comp1p</availability_zone></item>
              </rates>
            </item>
          </services>
        </item>
      </instances>
      <volumes>
        <item>
          <name>st2</name>
          <type>st2</type>
          <iops>3000</iops>
          <measure>GiB/h</measure>
          <rates><item><price>0.0035</price></item></rates>
        </item>
      </volumes>
      <others>
        <item>
          <name>elastic_ip</name>
          <deprecated>true</deprecated>
          <rates><item><price>0.10</price></item></rates>
        </item>
      </others>
      <oses>
        <item>
          <name>windows</name>
          <licence_type>
            <base>per_core</base>
            <parameters><core_count>2</core_count></parameters>
          </licence_type>
          <rates><item><price>1.25</price></item></rates>
        </item>
      </oses>
      <hosts>
        <item>
          <name>dedicated</name>
          <cpu_generation>icelake</cpu_generation>
          <physical_cores>32</physical_cores>
          <sockets>2</sockets>
          <type>host</type>
          <rates><item><price>100.00</price></item></rates>
        </item>
      </hosts>
    </item>
  </tariffs>
</DescribeTariffsResponse>";

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).expect("valid decimal")
    }

    #[test]
    fn test_should_describe_tariffs_with_exact_prices() {
        assert_eq!(
            request_params(&DescribeTariffsRequest::default()),
            expected(&[("Action", "DescribeTariffs")])
        );

        let tariffs = match decode(Ec2Action::DescribeTariffs, DESCRIBE_TARIFFS) {
            Ec2Response::Tariffs(tariffs) => tariffs,
            other => panic!("expected tariffs, got {other:?}"),
        };

        assert_eq!(tariffs.request_id.as_deref(), Some("t-1"));
        assert_eq!(tariffs.len(), 1);
        let tariff = &tariffs[0];
        assert_eq!(tariff.name.as_deref(), Some("default"));
        assert_eq!(tariff.currency.as_deref(), Some("RUB"));

        let instance = &tariff.instances[0];
        assert_eq!(instance.cpu, Some(2));
        assert_eq!(instance.ccus, Some(dec("0.5")));
        assert_eq!(instance.memory, Some(8192));
        let rate = &instance.services[0].rates[0];
        assert_eq!(rate.price, Some(dec("3.1415")));
        assert_eq!(rate.availability_zone.as_deref(), Some("ru-msk-comp1p"));

        let volume = &tariff.volumes[0];
        assert_eq!(volume.kind.as_deref(), Some("st2"));
        assert_eq!(volume.iops, Some(3000));
        assert_eq!(volume.service.measure.as_deref(), Some("GiB/h"));
        assert_eq!(
            volume.service.rates[0].price.map(|p| p.to_string()),
            Some("0.0035".to_owned())
        );

        let other = &tariff.others[0];
        assert!(other.deprecated);
        assert!(!volume.service.deprecated);

        let os = &tariff.oses[0];
        let licence = os.licence_type.as_ref().expect("licence type");
        assert_eq!(licence.base.as_deref(), Some("per_core"));
        assert_eq!(
            licence.parameters.as_ref().and_then(|p| p.core_count),
            Some(2)
        );
        assert_eq!(os.service.rates[0].price, Some(dec("1.25")));

        let host = &tariff.hosts[0];
        assert_eq!(host.cpu_generation.as_deref(), Some("icelake"));
        assert_eq!(host.physical_cores, Some(32));
        assert_eq!(host.sockets, Some(2));
        assert_eq!(host.kind.as_deref(), Some("host"));
        assert_eq!(host.service.name.as_deref(), Some("dedicated"));
        assert!(tariff.instance_types.is_empty());
    }
}
