/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use humanize_rs::bytes::Bytes;
use yaml_rust::Yaml;

use super::InfluxdbTcpClientConfig;

/// Byte count, either as an integer or as a humanized string like "1KiB"
fn parse_payload_size(v: &Yaml) -> anyhow::Result<usize> {
    match v {
        Yaml::Integer(n) => {
            usize::try_from(*n).map_err(|_| anyhow!("payload size {n} is out of range"))
        }
        Yaml::String(s) => s
            .parse::<Bytes>()
            .map(|b| b.size())
            .map_err(|e| anyhow!("invalid payload size {s}: {e}")),
        _ => Err(anyhow!("payload size should be an integer or a humanized string")),
    }
}

impl InfluxdbTcpClientConfig {
    /// Parse from a map, or from a plain string as the address
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut addr: Option<String> = None;
                let mut payload_size = 0;

                for (k, v) in map.iter() {
                    let Yaml::String(k) = k else {
                        return Err(anyhow!("key in hash should be string"));
                    };
                    match k.to_lowercase().replace('-', "_").as_str() {
                        "addr" | "address" | "target" => {
                            let Yaml::String(s) = v else {
                                return Err(anyhow!(
                                    "yaml value type for key {k} should be 'string'"
                                ));
                            };
                            addr = Some(s.to_string());
                        }
                        "payload_size" => {
                            payload_size = parse_payload_size(v)
                                .context(format!("invalid value for key {k}"))?;
                        }
                        _ => return Err(anyhow!("invalid key {k}")),
                    }
                }

                let Some(addr) = addr else {
                    return Err(anyhow!("no target address has been set"));
                };
                let mut config = InfluxdbTcpClientConfig::new(addr);
                config.set_payload_size(payload_size);
                Ok(config)
            }
            Yaml::String(s) => Ok(InfluxdbTcpClientConfig::new(s.as_str())),
            _ => Err(anyhow!(
                "yaml value type for 'influxdb tcp client config' should be 'map' or 'string'"
            )),
        }
    }
}
