/// Classifier and priority-order tests
///
/// These tests exercise each classifier on its own and check that the
/// annotator resolves overlapping matches by priority.

use interestring::core::classifiers::{
    check_dll, check_registry, classify_as_dll_heuristic, is_format_string,
    is_possible_registry_key, lookup_dll_exact, lookup_win32_api, normalize_registry_key,
    LIKELY_DLL,
};
use interestring::core::internet::{is_interwebs, SuffixSet};
use interestring::core::tables::{ReferenceTables, DLL_ENTRIES};
use interestring::utils::file_utils::BUNDLED_TLD_LIST;
use interestring::{load_tld_set, Annotation, Annotator};

fn bundled() -> SuffixSet {
    load_tld_set(None).expect("Failed to load bundled TLD list")
}

#[test]
fn test_unclassified_lines_have_no_annotation() {
    let suffixes = bundled();
    let annotator = Annotator::new(&suffixes);

    for line in ["hello", "!This program cannot be run in DOS mode.", "xyz123", "", "%zz"] {
        assert_eq!(annotator.annotate_line(line), None, "line {:?}", line);
        assert_eq!(annotator.annotate_raw_line(line).annotation_text(), "");
    }
}

#[test]
fn test_registry_normalization_is_idempotent() {
    assert_eq!(
        normalize_registry_key("HKLM|SOFTWARE|FOO"),
        normalize_registry_key(r"HKLM\SOFTWARE\FOO")
    );
    assert_eq!(
        normalize_registry_key(r"HKEY_LOCAL_MACHINE\\Software\\Foo"),
        "HKLM|SOFTWARE|FOO"
    );
}

#[test]
fn test_registry_lookup() {
    let tables = ReferenceTables::builtin();

    assert_eq!(
        check_registry(
            r"HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\RunOnce",
            &tables.registry
        ),
        "Used to achieve persistence at the user level."
    );
    assert_eq!(
        check_registry(r"HKLM\SYSTEM\CurrentControlSet\Services", &tables.registry),
        "Windows services required to run at boot. Possible persistence mechanism."
    );
    // Unknown roots and bare roots miss without failing
    assert_eq!(check_registry(r"HKXX\SOFTWARE\Foo", &tables.registry), "");
    assert_eq!(check_registry("HKLM", &tables.registry), "");
}

#[test]
fn test_registry_trigger() {
    assert!(is_possible_registry_key(r"HKCU\SOFTWARE"));
    assert!(is_possible_registry_key("HKEY_DYN_DATA"));
    assert!(is_possible_registry_key(r"SOFTWARE\MICROSOFT\WINDOWS\CURRENTVERSION"));
    assert!(is_possible_registry_key(r"SOFTWARE\\MICROSOFT\\WINDOWS NT"));
    assert!(!is_possible_registry_key(r"SOFTWARE\MICROSOFT\WINDOWS NT"));
    assert!(!is_possible_registry_key("hklm"));
}

#[test]
fn test_unresolved_registry_is_matched_with_empty_detail() {
    let suffixes = bundled();
    let annotator = Annotator::new(&suffixes);

    let annotation = annotator.annotate_line("CurrentVersion");
    assert_eq!(annotation, Some(Annotation::Registry(String::new())));
    assert_eq!(annotation.unwrap().to_string(), "REGISTRY: ");
}

#[test]
fn test_dll_case_variants_classify_identically() {
    let suffixes = bundled();
    let annotator = Annotator::new(&suffixes);

    for (name, text) in DLL_ENTRIES {
        let expected = Some(Annotation::Dll(text.to_string()));
        let mixed: String = name
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_lowercase() } else { c })
            .collect();

        assert_eq!(annotator.annotate_line(name), expected);
        assert_eq!(annotator.annotate_line(&name.to_lowercase()), expected);
        assert_eq!(annotator.annotate_line(&mixed), expected);
    }
}

#[test]
fn test_dll_lookup_contracts() {
    let dlls = &ReferenceTables::builtin().dlls;

    assert_eq!(lookup_dll_exact("ntdll.dll", dlls), Some("Exports the Windows Native API"));
    assert_eq!(lookup_dll_exact("evil.dll", dlls), None);

    assert_eq!(check_dll("evil.dll", dlls), LIKELY_DLL);
    assert_eq!(check_dll("Ole32.dll", dlls), "Win32 API DLL");

    assert_eq!(classify_as_dll_heuristic("EVIL.DLL", dlls), Some(LIKELY_DLL));
    // The suffix check ignores case
    assert_eq!(classify_as_dll_heuristic("evil.dll", dlls), Some(LIKELY_DLL));
    assert_eq!(classify_as_dll_heuristic("Evil.Dll", dlls), Some(LIKELY_DLL));
    assert_eq!(classify_as_dll_heuristic("ntdll.DLL", dlls), Some("Exports the Windows Native API"));
    assert_eq!(classify_as_dll_heuristic(".dll", dlls), None);
    assert_eq!(classify_as_dll_heuristic("not a.dll", dlls), None);
    assert_eq!(classify_as_dll_heuristic("kernel32", dlls), None);
}

#[test]
fn test_win32_api_suffixes() {
    let api = &ReferenceTables::builtin().win32_api;

    let plain = lookup_win32_api("CreateFile", api).expect("CreateFile missing");
    assert_eq!(lookup_win32_api("CreateFileA", api), Some(plain));
    assert_eq!(lookup_win32_api("CreateFileW", api), Some(plain));
    assert!(lookup_win32_api("VirtualAlloc", api).is_some());
    assert_eq!(lookup_win32_api("createfilea", api), None);
}

#[test]
fn test_ip_addresses_are_interwebs() {
    let suffixes = bundled();

    assert!(is_interwebs("192.168.1.1", &suffixes));
    assert!(is_interwebs("::1", &suffixes));
    assert!(is_interwebs("http://10.0.0.1:8080/gate.php", &suffixes));
    assert!(!is_interwebs("999.1.1.1", &suffixes));
}

#[test]
fn test_domains_are_interwebs() {
    let suffixes = bundled();

    assert!(is_interwebs("example.com", &suffixes));
    assert!(is_interwebs("WWW.EXAMPLE.COM", &suffixes));
    assert!(is_interwebs("https://update.badguy.net/payload.bin", &suffixes));
    // Domain part too short
    assert!(!is_interwebs("ab.co", &suffixes));
    assert!(!is_interwebs("abc.com", &suffixes));
    // Not a listed suffix
    assert!(!is_interwebs("kernel32.dll", &suffixes));
}

#[test]
fn test_newer_generic_tlds_are_interwebs() {
    let suffixes = bundled();

    for line in [
        "update-check.cyou",
        "payload.zip",
        "login-secure.sbs",
        "cdn-files.cfd",
        "gate-panel.bond",
        "http://drop.quest/a",
        "panel.xin",
    ] {
        assert!(is_interwebs(line, &suffixes), "line {:?}", line);
    }
}

#[test]
fn test_bundled_tld_list_is_loaded_in_full() {
    let listed: Vec<&str> = BUNDLED_TLD_LIST
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .collect();

    assert_eq!(bundled().len(), listed.len());
    // The delegated root zone has well over a thousand TLDs
    assert!(listed.len() > 1400, "only {} TLDs bundled", listed.len());
    assert!(listed.iter().any(|tld| tld.starts_with("XN--")));
}

#[test]
fn test_format_strings() {
    assert!(is_format_string("%d "));
    assert!(is_format_string("%s\\%s"));
    assert!(is_format_string("%08x:"));
    assert!(is_format_string("%#x,"));
    assert!(is_format_string("%.2f%%"));
    assert!(is_format_string("%% done"));
    assert!(!is_format_string("%zz"));
    assert!(!is_format_string("%d"));
    assert!(!is_format_string("value %d "));
}

#[test]
fn test_known_string_takes_priority() {
    let mut tables = ReferenceTables::from_entries();
    tables
        .known_strings
        .insert("%s: ".to_string(), "Known format banner".to_string());
    tables
        .known_strings
        .insert("KERNEL32.DLL".to_string(), "Known DLL string".to_string());
    let suffixes = bundled();
    let annotator = Annotator::with_tables(&tables, &suffixes);

    assert_eq!(
        annotator.annotate_line("%s: "),
        Some(Annotation::KnownString("Known format banner".to_string()))
    );
    assert_eq!(
        annotator.annotate_line("KERNEL32.DLL"),
        Some(Annotation::KnownString("Known DLL string".to_string()))
    );
}

#[test]
fn test_priority_order() {
    let suffixes = bundled();
    let annotator = Annotator::new(&suffixes);

    // DLL beats the internet check even though the name has a dot
    assert!(matches!(annotator.annotate_line("ws2_32.dll"), Some(Annotation::Dll(_))));
    // Registry roots beat the internet check
    assert!(matches!(
        annotator.annotate_line("HKLM\\Software\\evil.com"),
        Some(Annotation::Registry(_))
    ));
    // Internet beats the format string check
    assert_eq!(annotator.annotate_line("%s.example.com"), Some(Annotation::Interwebs));
}

#[test]
fn test_header_lines_are_never_annotated() {
    let suffixes = bundled();
    let annotator = Annotator::new(&suffixes);

    for line in [
        "FLOSS static KERNEL32.DLL",
        "FLOSS decoded 3 strings",
        "FLOSS extracted 12 stackstrings",
        "FLOSS STATIC STRINGS: example.com",
    ] {
        let annotated = annotator.annotate_raw_line(line);
        assert_eq!(annotated.annotation, None, "line {:?}", line);
        assert_eq!(annotated.line, line);
    }
}

#[test]
fn test_end_to_end_annotations() {
    assert_eq!(
        interestring::annotate("KERNEL32.DLL").unwrap(),
        "DLL: Exposes most of the Win32 base APIs"
    );
    assert_eq!(
        interestring::annotate(r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\Run").unwrap(),
        "REGISTRY: Used to achieve persistence at the system level."
    );
    assert_eq!(interestring::annotate("  (16-le) example.com  ").unwrap(), "INTERWEBS");
}
