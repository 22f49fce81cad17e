/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::{Ipv6Addr, SocketAddr, SocketAddrV6, ToSocketAddrs};
use std::str::FromStr;

/// Resolve "host:port", "ipv4:port" or "[ipv6%zone]:port" to socket addresses.
///
/// The zone may be a numeric scope id, or an interface name on unix.
pub(crate) fn resolve(addr: &str) -> io::Result<Vec<SocketAddr>> {
    if let Some(s) = addr.strip_prefix('[')
        && let Some((host, port)) = s.split_once("]:")
        && let Some((ip, zone)) = host.split_once('%')
    {
        let ip = Ipv6Addr::from_str(ip).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid ipv6 address {ip}: {e}"))
        })?;
        let port = u16::from_str(port).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid port {port}: {e}"))
        })?;
        let scope_id = zone_scope_id(zone)?;
        return Ok(vec![SocketAddr::V6(SocketAddrV6::new(ip, port, 0, scope_id))]);
    }

    Ok(addr.to_socket_addrs()?.collect())
}

fn zone_scope_id(zone: &str) -> io::Result<u32> {
    match u32::from_str(zone) {
        Ok(id) => Ok(id),
        Err(_) => interface_index(zone),
    }
}

#[cfg(unix)]
fn interface_index(name: &str) -> io::Result<u32> {
    let name = std::ffi::CString::new(name)?;
    let id = unsafe { libc::if_nametoindex(name.as_ptr()) };
    if id == 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(id)
    }
}

#[cfg(not(unix))]
fn interface_index(name: &str) -> io::Result<u32> {
    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("unsupported ipv6 zone {name}"),
    ))
}
