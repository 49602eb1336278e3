//! Kill-script generation
//!
//! Emits a shell script that kills a list of processes one at a time and
//! prints a `free` snapshot after each kill, for rough per-process memory
//! accounting on systems where `/proc/<pid>/smaps` is not available.
//! Running the script in both orders and averaging the snapshots gives a
//! usable estimate of memory shared between processes.

/// Shell preamble: the `ps_kill` helper plus an initial `free` snapshot.
const PREAMBLE: &str = r#"#! /bin/sh
ps_kill() {
  TEXT="$*"
  PIDS=`ps | grep "$TEXT" | grep -v grep | cut -b 1-6`
  if [ "x$PIDS" = "x" ]
  then
    echo "$TEXT not found"
  else
    echo "Killing $TEXT - $PIDS"
    kill -9 $PIDS
    sleep 2
    free
  fi
}
free

"#;

/// Process match strings from the target router image, in boot order.
pub const DEFAULT_PROCESSES: [&str; 11] = [
    "lua /usr/share/lua/pm.lua",
    "bird6-elsa",
    "babeld",
    "dhcpd -4",
    "dhcpd -6",
    "dhclient -nw -pf",
    "dhclient -nw -6 -P eth0.2",
    "dhclient -nw -6 -P eth0.3",
    "dhclient -nw -6 -P eth0.4",
    "dhclient -nw -6 -P eth1",
    "radvd",
];

/// Order in which the processes are killed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KillOrder {
    /// Kill in the order given (boot order)
    Forward,
    /// Kill dependents first (default)
    #[default]
    Reverse,
}

/// Render the complete kill script for the given process match strings.
pub fn render_kill_script<S: AsRef<str>>(processes: &[S], order: KillOrder) -> String {
    let mut out = String::from(PREAMBLE);
    let names: Box<dyn Iterator<Item = &S>> = match order {
        KillOrder::Forward => Box::new(processes.iter()),
        KillOrder::Reverse => Box::new(processes.iter().rev()),
    };
    for name in names {
        out.push_str(&format!("ps_kill \"{}\"\n", name.as_ref()));
    }
    out
}
