use assert_cmd::Command;

pub fn gdxsplit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gdxsplit").unwrap();
    cmd.env_remove("GDXSPLIT_CONFIG");
    cmd.env_remove("GDXSPLIT_GAMS_DIR");
    cmd.env_remove("GDXSPLIT_LAUNCHER");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A small gdxdump-style text dump with three trading periods
#[allow(dead_code)]
pub const SAMPLE_DUMP: &str = "\
* GDX dump
Set tp(*) trading periods /
'TP1' 'period 1',
'TP2' 'period 2',
'TP3' 'period 3' /;

Parameter price(*,*) /
'TP1'.'HAY2201' 31.5,
'TP1'.'OTA2201' 33.1,
'TP2'.'HAY2201' 29.8,
'TP2'.'OTA2201' 30.2,
'TP3'.'HAY2201' 28.4,
'TP3'.'OTA2201' 29.0 /;

Scalar voll / 10000 /;
";

/// `SAMPLE_DUMP` scrubbed down to trading period 1
#[allow(dead_code)]
pub const SAMPLE_TP1: &str = "\
* GDX dump
Set tp(*) trading periods /
'TP1' 'period 1'/;

Parameter price(*,*) /
'TP1'.'HAY2201' 31.5,
'TP1'.'OTA2201' 33.1/;

Scalar voll / 10000 /;
";
