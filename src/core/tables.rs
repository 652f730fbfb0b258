/// Reference data for the annotator
///
/// This module contains the static lookup tables used to explain strings:
/// known library strings, common DLL names, registry keys used for persistence,
/// and the aliases of the registry root keys.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::core::win32_api::WIN32_API_ENTRIES;

/// Strings that are recognisable verbatim (case-sensitive)
pub const KNOWN_STRING_ENTRIES: &[(&str, &str)] = &[
    (
        "Copyright (c) by P.J. Plauger, licensed by Dinkumware, Ltd. ALL RIGHTS RESERVED.",
        "Dinkumware maintains the standard C++ libraries that are iincluded in Microsoft Visual C++",
    ),
];

/// Common Windows DLLs, keyed by upper-case file name.
///
/// Sources:
///   https://en.wikipedia.org/wiki/Microsoft_Windows_library_files
pub const DLL_ENTRIES: &[(&str, &str)] = &[
    ("KERNEL32.DLL", "Exposes most of the Win32 base APIs"),
    ("GDI32.DLL", "Win32 API DLL: Graphics Data Interface functions for basic drawing for output to displays or printers"),
    ("USER32.DLL", "Win32 API DLL: Creates and manipulates standard elements of UI like the desktop, windows, and menus"),
    ("COMCTL32.DLL", "Win32 API DLL"),
    ("COMDLG32.DLL", "Win32 API DLL"),
    ("WS2_32.DLL", "Win32 API DLL"),
    ("ADVAPI32.DLL", "Win32 API DLL"),
    ("NETAPI32.DLL", "Win32 API DLL"),
    ("OLE32.DLL", "Win32 API DLL"),
    ("NTDLL.DLL", "Exports the Windows Native API"),
];

/// Registry keys commonly abused for persistence.
///
/// Keys use `|` in place of `\` and are upper-case, see
/// [`crate::core::classifiers::normalize_registry_key`].
///
/// Sources:
///   https://resources.infosecinstitute.com/common-malware-persistence-mechanisms
pub const REGISTRY_ENTRIES: &[(&str, &str)] = &[
    ("HKCU|SOFTWARE|MICROSOFT|COMMAND PROCESSOR|AUTORUN", "Possible persistence mechanism. If /D was NOT specified on the command line, then when CMD.EXE starts, it looks for the following REG_SZ/REG_EXPAND_SZ registry variables, and if either or both are present, they are executed first."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUNSERVICESONCE", "Possible persistence mechanism."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUNSERVICES", "Possible persistence mechanism."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINLOGON|SHELL", "Possible persistence mechanism."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|EXPLORER|USER SHELL", "Persistence mechanism. Listings here will be launched furing logon and reboot."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|EXPLORER|SHELL", "Persistence mechanism. Listings here will be launched furing logon and reboot."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUN", "Used to achieve persistence at the user level."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUNONCE", "Used to achieve persistence at the user level."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|POLICIES|EXPLORER|RUN", "Possible persistence mechanism."),
    ("HKCU|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINDOWS|LOAD", "Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|COMMAND PROCESSOR|AUTORUN", "Possible persistence mechanism. If /D was NOT specified on the command line, then when CMD.EXE starts, it looks for the following REG_SZ/REG_EXPAND_SZ registry variables, and if either or both are present, they are executed first."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|EXPLORER|USER SHELL", "Persistence mechanism. Listings here will be launched furing logon and reboot."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|EXPLORER|SHELL", "Persistence mechanism. Listings here will be launched furing logon and reboot."),
    ("HKLM|SYSTEM|CURRENTCONTROLSET|CONTROL|SESSION MANAGER|BOOTEXECUTE", "Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUNSERVICESONCE", "Used to start background services. Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUNSERVICES", "Used to start background services. Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINLOGON", "Winlogon uses values in this key to launch login scripts. The Userinit key can be changed to point to something other than userinit.exe, which will be launched by Winlogon."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINLOGON|NOTIFY", "Can be edited to launch a DLL whenever Secure Attention Services (ctrl+alt+del) events occur."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINLOGON|USERINIT", "Winlogon uses values in this key to launch login scripts. The Userinit key can be changed to point to something other than userinit.exe, which will be launched by Winlogon."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINLOGON|SHELL", "Should only point to explorer.exe and not the complete path."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|INIFILEMAPPING|SYSTEM.INI|BOOT", "Should only point to location under Winlogon."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|SHELLSERVICEOBJECTDELAYLOAD", "Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUN", "Used to achieve persistence at the system level."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUNONCE", "Used to achieve persistence at the system level."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|RUNONCEEX", "Used to achieve persistence at the system level."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|POLICIES|EXPLORER|RUN", "Used to achieve persistence at the system level."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINDOWS", "Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|EXPLORER|SHAREDTASKSCHEDULER", "Possible persistence mechanism."),
    ("HKLM|SYSTEM|CURRENTCONTROLSET|CONTROL|HIVELIST", "Persistence mechanism. smss.exe launches prior to Windows subsystem is loaded and calls this hive."),
    ("HKLM|SYSTEM|CONTROLSET002|CONTROL|SESSION MANAGER", "Persistence mechanism. smss.exe starts anything present in this key, which should have value of 'autocheck autochk*'. Additional values suggest malware will launch at boot."),
    ("HKLM|SYSTEM|CURRENTCONTROLSET|SERVICES", "Windows services required to run at boot. Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|EXPLORER|BROWSER HELPER OBJECTS", "DLL module loaded when Internet Explorer starts. Possible persistence mechanism."),
    ("HKLM|SOFTWARE|MICROSOFT|WINDOWS NT|CURRENTVERSION|WINDOWS|APPINIT_DLLS", "Shows DLLs loaded by User32.dll, which is a good place to check for malware persistence."),
    ("HKLM|SYSTEM|CURRENTCONTROLSET|CONTROL|SESSION MANAGER|KNOWNDLLS", "OS checks if a DLL is known. If not loaded and not in KnownDLLs, then OS starts searching directories, which can be abused by DLL search order hijacking."),
    // Rootless, only reachable through a direct table lookup
    ("SOFTWARE|MICROSOFT|WINDOWS|CURRENTVERSION|INTERNET SETTINGS", "Internet settings."),
];

/// Registry root key names and abbreviations mapped to their canonical form
pub const REGISTRY_ROOTS: &[(&str, &str)] = &[
    ("HKEY_LOCAL_MACHINE", "HKLM"),
    ("HKEY_CURRENT_CONFIG", "HKCC"),
    ("HKEY_CLASSES_ROOT", "HKCR"),
    ("HKEY_USERS", "HKU"),
    ("HKEY_CURRENT_USER", "HKCU"),
    ("HKEY_PERFORMANCE_DATA", "HKEY_PERFORMANCE_DATA"),
    ("HKEY_DYN_DATA", "HKEY_DYN_DATA"),
    ("HKLM", "HKLM"),
    ("HKCC", "HKCC"),
    ("HKCR", "HKCR"),
    ("HKU", "HKU"),
    ("HKCU", "HKCU"),
];

/// Upper-case substrings that hint at a registry path without a root key.
/// The second one is an escaped path as it appears in compiled strings.
pub const REGISTRY_SIGNATURES: &[&str] = &["CURRENTVERSION", "MICROSOFT\\\\WINDOWS"];

/// The full set of lookup tables consulted by the annotator.
///
/// All tables are read-only once built. The built-in set is shared process-wide
/// through [`ReferenceTables::builtin`]; tests and embedders can assemble their own.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// Exact string -> description (case-sensitive)
    pub known_strings: HashMap<String, String>,
    /// Win32 API symbol -> MSDN summary (case-sensitive)
    pub win32_api: HashMap<String, String>,
    /// Upper-case DLL name -> description
    pub dlls: HashMap<String, String>,
    /// Normalized registry key -> description
    pub registry: HashMap<String, String>,
}

impl ReferenceTables {
    /// Build tables from the compiled-in data
    pub fn from_entries() -> Self {
        Self {
            known_strings: to_map(KNOWN_STRING_ENTRIES),
            win32_api: to_map(WIN32_API_ENTRIES),
            dlls: to_map(DLL_ENTRIES),
            registry: to_map(REGISTRY_ENTRIES),
        }
    }

    /// Shared instance of the compiled-in tables
    pub fn builtin() -> &'static ReferenceTables {
        &*BUILTIN_TABLES
    }
}

fn to_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Resolve a registry root name or abbreviation to its canonical abbreviation
pub fn canonical_root(candidate: &str) -> Option<&'static str> {
    REGISTRY_ROOTS
        .iter()
        .find(|(name, _)| *name == candidate)
        .map(|(_, canonical)| *canonical)
}

lazy_static! {
    static ref BUILTIN_TABLES: ReferenceTables = ReferenceTables::from_entries();
}
