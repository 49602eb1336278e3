//! Integration tests for the killgen command

use covtools::killgen::{run, KillGenArgs};

fn render(args: &KillGenArgs) -> String {
    let mut out = Vec::new();
    run(args, &mut out).expect("run killgen");
    String::from_utf8(out).expect("utf-8 script")
}

#[test]
fn test_default_script_kills_builtin_list_in_reverse() {
    let args = KillGenArgs {
        forward: false,
        processes: vec![],
    };
    let script = render(&args);
    assert!(script.starts_with("#! /bin/sh\n"));
    let kills: Vec<&str> = script
        .lines()
        .filter(|l| l.starts_with("ps_kill \""))
        .collect();
    assert_eq!(kills.first(), Some(&"ps_kill \"radvd\""));
    assert_eq!(kills.last(), Some(&"ps_kill \"lua /usr/share/lua/pm.lua\""));
}

#[test]
fn test_explicit_processes_override_builtin_list() {
    let args = KillGenArgs {
        forward: true,
        processes: vec!["dnsmasq".to_string(), "ntpd".to_string()],
    };
    let script = render(&args);
    assert!(script.contains("ps_kill \"dnsmasq\"\nps_kill \"ntpd\"\n"));
    assert!(!script.contains("radvd"));
}
