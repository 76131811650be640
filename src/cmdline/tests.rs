use super::*;

const SAMPLE: &str = "quiet console=ttyS0 console=ttyS1 root=/dev/sda1";

#[test]
fn test_parse_sample() {
    let cmdline = Cmdline::new(SAMPLE);

    assert_eq!(cmdline.keys(), ["quiet", "console", "root"]);
    assert_eq!(cmdline.get("console").unwrap().values(), ["ttyS0", "ttyS1"]);
    assert_eq!(cmdline.get("console").first(), Some("ttyS0"));
    assert_eq!(cmdline.to_string(), SAMPLE);
}

#[test]
fn test_set_replaces_in_place() {
    let cmdline = Cmdline::new(SAMPLE);
    cmdline.set("root", Parameter::new("root").with_value("/dev/sda2"));

    assert_eq!(
        cmdline.to_string(),
        "quiet console=ttyS0 console=ttyS1 root=/dev/sda2"
    );
}

#[test]
fn test_set_new_key_goes_last() {
    let cmdline = Cmdline::new(SAMPLE);
    cmdline.set("quiet", Parameter::new("quiet").with_value("1"));
    cmdline.set("ro", Parameter::new("ro"));

    assert_eq!(cmdline.keys(), ["quiet", "console", "root", "ro"]);
    assert_eq!(
        cmdline.to_string(),
        "quiet=1 console=ttyS0 console=ttyS1 root=/dev/sda1"
    );
}

#[test]
fn test_valueless_parameter_is_not_serialized() {
    let cmdline = Cmdline::new("a=1");
    cmdline.set("ro", Parameter::new("ro"));

    assert_eq!(cmdline.keys(), ["a", "ro"]);
    assert_eq!(cmdline.to_string(), "a=1");
    assert_eq!(cmdline.strings(), ["a=1"]);

    let reparsed = Parameters::parse_args(cmdline.strings());
    assert!(reparsed.get("ro").is_none());
}

#[test]
fn test_append_accumulates() {
    let cmdline = Cmdline::new(SAMPLE);
    cmdline.append("console", "ttyS2");

    assert_eq!(
        cmdline.get("console").unwrap().values(),
        ["ttyS0", "ttyS1", "ttyS2"]
    );
}

#[test]
fn test_append_missing_key_matches_insert_at_end() {
    let appended = Cmdline::new(SAMPLE);
    appended.append("init", "/sbin/init");

    let set = Cmdline::new(SAMPLE);
    set.set("init", Parameter::new("init").with_value("/sbin/init"));

    assert_eq!(appended.parameters(), set.parameters());
}

#[test]
fn test_append_all_with_overwrite() {
    let cmdline = Cmdline::new(SAMPLE);
    let options = AppendAllOptions::default().with_overwrite_keys(["console"]);
    cmdline.append_all(["console=ttyAMA0", "init=/sbin/init"], &options);

    assert_eq!(cmdline.get("console").unwrap().values(), ["ttyAMA0"]);
    assert_eq!(cmdline.keys(), ["quiet", "console", "root", "init"]);
    assert_eq!(cmdline.get("init").unwrap().values(), ["/sbin/init"]);
}

#[test]
fn test_append_all_without_overwrite_keeps_prior_values() {
    let cmdline = Cmdline::new(SAMPLE);
    cmdline.append_all(["console=ttyAMA0 root=/dev/vda"], &AppendAllOptions::default());

    assert_eq!(
        cmdline.get("console").unwrap().values(),
        ["ttyS0", "ttyS1", "ttyAMA0"]
    );
    assert_eq!(cmdline.get("root").unwrap().values(), ["/dev/sda1", "/dev/vda"]);
}

#[test]
fn test_set_all_overwrites_every_key() {
    let cmdline = Cmdline::new(SAMPLE);
    cmdline.set_all(["console=tty0", "console=tty1", "ip=dhcp"]);

    assert_eq!(
        cmdline.to_string(),
        "quiet console=tty0 console=tty1 root=/dev/sda1 ip=dhcp"
    );
}

#[test]
fn test_missing_lookup_is_absent() {
    let cmdline = Cmdline::new(SAMPLE);

    assert!(cmdline.get("missing").is_none());
    assert_eq!(cmdline.get("missing").first(), None);
    assert_eq!(cmdline.get("console").get(5), None);
    assert!(!cmdline.get("missing").contains("ttyS0"));
}

#[test]
fn test_empty_line() {
    let cmdline = Cmdline::new("");

    assert!(cmdline.is_empty());
    assert_eq!(cmdline.len(), 0);
    assert_eq!(cmdline.to_string(), "");
    assert!(cmdline.bytes().is_empty());
}

#[test]
fn test_flag_roundtrip_has_no_equals() {
    let cmdline = Cmdline::new("quiet ro root=/dev/sda1");
    let reparsed = Parameters::parse_args(cmdline.strings());

    assert_eq!(reparsed.to_string(), "quiet ro root=/dev/sda1");
    assert_eq!(reparsed.get("quiet").first(), Some(""));
}

#[test]
fn test_bytes_and_clone() {
    let cmdline = Cmdline::new(SAMPLE);
    let copy = cmdline.clone();
    copy.append("extra", "1");

    assert_eq!(cmdline.bytes(), SAMPLE.as_bytes());
    assert_eq!(copy.len(), cmdline.len() + 1);
}

#[test]
fn test_read_from_source() {
    let cmdline = Cmdline::read_from(&LiteralSource::new("ro quiet\n")).unwrap();
    assert_eq!(cmdline.to_string(), "ro quiet");

    let failing = || -> Result<String, CmdlineError> {
        Err(CmdlineError::source_read(
            "broken",
            &std::io::Error::other("boom"),
        ))
    };
    let err = Cmdline::read_from(&failing).unwrap_err();
    assert!(err.to_string().contains("broken"));
}
