//! Pre-built mock host scenarios for testing.
//!
//! `typical_system()` on each mock describes the same Ubuntu desktop, so the
//! three can be combined into a full `Collector`.

use super::env::MockEnv;
use super::filesystem::MockFs;
use super::runner::MockRunner;

pub const TYPICAL_OS_RELEASE: &str = "\
PRETTY_NAME=\"Ubuntu 24.04.1 LTS\"
NAME=\"Ubuntu\"
VERSION_ID=\"24.04\"
VERSION=\"24.04.1 LTS (Noble Numbat)\"
VERSION_CODENAME=noble
ID=ubuntu
ID_LIKE=debian
HOME_URL=\"https://www.ubuntu.com/\"
";

pub const TYPICAL_CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 154
model name\t: 12th Gen Intel(R) Core(TM) i7-1260P
stepping\t: 3
cpu MHz\t\t: 400.000
cache size\t: 18432 KB
flags\t\t: fpu vme de pse tsc msr pae mce

processor\t: 1
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 154
model name\t: 12th Gen Intel(R) Core(TM) i7-1260P
stepping\t: 3
cpu MHz\t\t: 2500.000
cache size\t: 18432 KB
flags\t\t: fpu vme de pse tsc msr pae mce
";

pub const TYPICAL_FREE: &str = "\
               total        used        free      shared  buff/cache   available
Mem:        16000000     8000000     2000000      500000     6000000     7000000
Swap:        2097148           0     2097148
";

impl MockFs {
    /// Creates the filesystem of a typical Ubuntu desktop.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();
        fs.add_file("/etc/os-release", TYPICAL_OS_RELEASE);
        fs.add_file("/proc/uptime", "12345.67 98765.43\n");
        fs.add_file("/proc/cpuinfo", TYPICAL_CPUINFO);
        fs
    }
}

impl MockRunner {
    /// Creates the commands of a typical Ubuntu desktop with dpkg and snap.
    pub fn typical_system() -> Self {
        let mut runner = Self::new();
        runner.add_output("uname", &["-smr"], "Linux 6.8.0-45-generic x86_64\n");
        runner.add_output("free", &[], TYPICAL_FREE);
        runner.add_output(
            "/bin/bash",
            &["--version"],
            "GNU bash, version 5.2.21(1)-release (x86_64-pc-linux-gnu)\n\
             Copyright (C) 2022 Free Software Foundation, Inc.\n",
        );

        runner.add_program("dpkg");
        runner.add_output(
            "dpkg-query",
            &["-f", "${binary:Package}\\n", "-W"],
            "adduser\napt\nbash\ncoreutils\n",
        );
        runner.add_output(
            "snap",
            &["list"],
            "Name      Version    Rev    Tracking       Publisher   Notes\n\
             core22    20240111   1122   latest/stable  canonical✓  base\n\
             firefox   124.0.2-1  4090   latest/stable  mozilla✓    -\n",
        );
        runner
    }
}

impl MockEnv {
    /// Creates the environment of a typical interactive session.
    pub fn typical_system() -> Self {
        let mut env = Self::new();
        env.set_hostname("devbox");
        env.set("USER", "alice");
        env.set("SHELL", "/bin/bash");
        env.set("TERM_PROGRAM", "WezTerm");
        env
    }
}
