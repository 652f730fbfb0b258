/// Win32 API reference data
///
/// Summaries follow the MSDN one-line descriptions. APIs that exist in ANSI and
/// Unicode flavours are keyed by their base name (`CreateFile`, not
/// `CreateFileA`/`CreateFileW`); the annotator strips the suffix before lookup.

pub const WIN32_API_ENTRIES: &[(&str, &str)] = &[
    // Process and thread management
    ("CreateProcess", "Creates a new process and its primary thread. The new process runs in the security context of the calling process."),
    ("CreateProcessAsUser", "Creates a new process and its primary thread. The new process runs in the security context of the user represented by the specified token."),
    ("CreateProcessWithToken", "Creates a new process and its primary thread. The new process runs in the security context of the specified token."),
    ("OpenProcess", "Opens an existing local process object."),
    ("TerminateProcess", "Terminates the specified process and all of its threads."),
    ("ExitProcess", "Ends the calling process and all its threads."),
    ("GetCurrentProcess", "Retrieves a pseudo handle for the current process."),
    ("GetCurrentProcessId", "Retrieves the process identifier of the calling process."),
    ("CreateThread", "Creates a thread to execute within the virtual address space of the calling process."),
    ("CreateRemoteThread", "Creates a thread that runs in the virtual address space of another process."),
    ("CreateRemoteThreadEx", "Creates a thread that runs in the virtual address space of another process and optionally specifies extended attributes such as processor group affinity."),
    ("OpenThread", "Opens an existing thread object."),
    ("SuspendThread", "Suspends the specified thread."),
    ("ResumeThread", "Decrements a thread's suspend count. When the suspend count is decremented to zero, the execution of the thread is resumed."),
    ("GetThreadContext", "Retrieves the context of the specified thread."),
    ("SetThreadContext", "Sets the context for the specified thread."),
    ("QueueUserAPC", "Adds a user-mode asynchronous procedure call (APC) object to the APC queue of the specified thread."),
    ("WinExec", "Runs the specified application. Provided only for compatibility with 16-bit Windows."),
    ("ShellExecute", "Performs an operation on a specified file."),
    ("ShellExecuteEx", "Performs an operation on a specified file."),
    ("CreateToolhelp32Snapshot", "Takes a snapshot of the specified processes, as well as the heaps, modules, and threads used by these processes."),
    ("Process32First", "Retrieves information about the first process encountered in a system snapshot."),
    ("Process32Next", "Retrieves information about the next process recorded in a system snapshot."),
    ("Module32First", "Retrieves information about the first module associated with a process."),
    ("Module32Next", "Retrieves information about the next module associated with a process or thread."),
    ("Thread32First", "Retrieves information about the first thread of any process encountered in a system snapshot."),
    ("Thread32Next", "Retrieves information about the next thread of any process encountered in the system memory snapshot."),
    ("EnumProcesses", "Retrieves the process identifier for each process object in the system."),
    ("EnumProcessModules", "Retrieves a handle for each module in the specified process."),
    ("GetModuleFileName", "Retrieves the fully qualified path for the file that contains the specified module."),
    ("GetModuleHandle", "Retrieves a module handle for the specified module. The module must have been loaded by the calling process."),
    ("Sleep", "Suspends the execution of the current thread until the time-out interval elapses."),
    ("WaitForSingleObject", "Waits until the specified object is in the signaled state or the time-out interval elapses."),

    // Memory
    ("VirtualAlloc", "Reserves, commits, or changes the state of a region of pages in the virtual address space of the calling process."),
    ("VirtualAllocEx", "Reserves, commits, or changes the state of a region of memory within the virtual address space of a specified process."),
    ("VirtualProtect", "Changes the protection on a region of committed pages in the virtual address space of the calling process."),
    ("VirtualProtectEx", "Changes the protection on a region of committed pages in the virtual address space of a specified process."),
    ("VirtualFree", "Releases, decommits, or releases and decommits a region of pages within the virtual address space of the calling process."),
    ("ReadProcessMemory", "Reads data from an area of memory in a specified process."),
    ("WriteProcessMemory", "Writes data to an area of memory in a specified process."),
    ("HeapAlloc", "Allocates a block of memory from a heap."),
    ("HeapCreate", "Creates a private heap object that can be used by the calling process."),
    ("MapViewOfFile", "Maps a view of a file mapping into the address space of a calling process."),
    ("CreateFileMapping", "Creates or opens a named or unnamed file mapping object for a specified file."),
    ("NtUnmapViewOfSection", "Unmaps a view of a section from the virtual address space of a subject process."),
    ("ZwUnmapViewOfSection", "Unmaps a view of a section from the virtual address space of a subject process."),

    // Dynamic loading
    ("LoadLibrary", "Loads the specified module into the address space of the calling process."),
    ("LoadLibraryEx", "Loads the specified module into the address space of the calling process, with additional load options."),
    ("GetProcAddress", "Retrieves the address of an exported function or variable from the specified dynamic-link library (DLL)."),
    ("FreeLibrary", "Frees the loaded dynamic-link library (DLL) module and, if necessary, decrements its reference count."),
    ("LdrLoadDll", "Undocumented native API used by LoadLibrary to load a DLL."),

    // Files
    ("CreateFile", "Creates or opens a file or I/O device."),
    ("ReadFile", "Reads data from the specified file or input/output (I/O) device."),
    ("WriteFile", "Writes data to the specified file or input/output (I/O) device."),
    ("DeleteFile", "Deletes an existing file."),
    ("CopyFile", "Copies an existing file to a new file."),
    ("MoveFile", "Moves an existing file or a directory, including its children."),
    ("MoveFileEx", "Moves an existing file or directory, including its children, with various move options."),
    ("FindFirstFile", "Searches a directory for a file or subdirectory with a name that matches a specific name."),
    ("FindNextFile", "Continues a file search from a previous call to the FindFirstFile, FindFirstFileEx, or FindFirstFileTransacted functions."),
    ("GetTempPath", "Retrieves the path of the directory designated for temporary files."),
    ("GetTempFileName", "Creates a name for a temporary file."),
    ("SetFileAttributes", "Sets the attributes for a file or directory."),
    ("GetSystemDirectory", "Retrieves the path of the system directory."),
    ("GetWindowsDirectory", "Retrieves the path of the Windows directory."),
    ("DeviceIoControl", "Sends a control code directly to a specified device driver, causing the corresponding device to perform the corresponding operation."),

    // Registry
    ("RegOpenKey", "Opens the specified registry key. Provided only for compatibility with 16-bit versions of Windows."),
    ("RegOpenKeyEx", "Opens the specified registry key."),
    ("RegCreateKey", "Creates the specified registry key. Provided only for compatibility with 16-bit versions of Windows."),
    ("RegCreateKeyEx", "Creates the specified registry key. If the key already exists, the function opens it."),
    ("RegSetValue", "Sets the data for the default or unnamed value of a specified registry key."),
    ("RegSetValueEx", "Sets the data and type of a specified value under a registry key."),
    ("RegQueryValue", "Retrieves the data associated with the default or unnamed value of a specified registry key."),
    ("RegQueryValueEx", "Retrieves the type and data for the specified value name associated with an open registry key."),
    ("RegDeleteKey", "Deletes a subkey and its values."),
    ("RegDeleteValue", "Removes a named value from the specified registry key."),
    ("RegEnumKey", "Enumerates the subkeys of the specified open registry key."),
    ("RegEnumKeyEx", "Enumerates the subkeys of the specified open registry key."),
    ("RegEnumValue", "Enumerates the values for the specified open registry key."),
    ("RegCloseKey", "Closes a handle to the specified registry key."),

    // Services
    ("OpenSCManager", "Establishes a connection to the service control manager on the specified computer and opens the specified service control manager database."),
    ("CreateService", "Creates a service object and adds it to the specified service control manager database."),
    ("OpenService", "Opens an existing service."),
    ("StartService", "Starts a service."),
    ("ControlService", "Sends a control code to a service."),
    ("DeleteService", "Marks the specified service for deletion from the service control manager database."),
    ("ChangeServiceConfig", "Changes the configuration parameters of a service."),
    ("StartServiceCtrlDispatcher", "Connects the main thread of a service process to the service control manager."),

    // Security and tokens
    ("OpenProcessToken", "Opens the access token associated with a process."),
    ("AdjustTokenPrivileges", "Enables or disables privileges in the specified access token."),
    ("LookupPrivilegeValue", "Retrieves the locally unique identifier (LUID) used on a specified system to locally represent the specified privilege name."),
    ("DuplicateTokenEx", "Creates a new access token that duplicates an existing token."),
    ("ImpersonateLoggedOnUser", "Lets the calling thread impersonate the security context of a logged-on user."),
    ("LogonUser", "Attempts to log a user on to the local computer."),
    ("IsDebuggerPresent", "Determines whether the calling process is being debugged by a user-mode debugger."),
    ("CheckRemoteDebuggerPresent", "Determines whether the specified process is being debugged."),
    ("OutputDebugString", "Sends a string to the debugger for display."),
    ("NtQueryInformationProcess", "Retrieves information about the specified process."),

    // Cryptography
    ("CryptAcquireContext", "Used to acquire a handle to a particular key container within a particular cryptographic service provider (CSP)."),
    ("CryptCreateHash", "Initiates the hashing of a stream of data."),
    ("CryptHashData", "Adds data to a specified hash object."),
    ("CryptDeriveKey", "Generates cryptographic session keys derived from a base data value."),
    ("CryptEncrypt", "Encrypts data."),
    ("CryptDecrypt", "Decrypts data previously encrypted by using the CryptEncrypt function."),
    ("CryptGenRandom", "Fills a buffer with cryptographically random bytes."),
    ("CryptImportKey", "Transfers a cryptographic key from a key BLOB into a cryptographic service provider (CSP)."),
    ("BCryptEncrypt", "Encrypts a block of data."),
    ("BCryptDecrypt", "Decrypts a block of data."),

    // Networking
    ("WSAStartup", "Initiates use of the Winsock DLL by a process."),
    ("socket", "Creates a socket that is bound to a specific transport service provider."),
    ("connect", "Establishes a connection to a specified socket."),
    ("bind", "Associates a local address with a socket."),
    ("listen", "Places a socket in a state in which it is listening for an incoming connection."),
    ("accept", "Permits an incoming connection attempt on a socket."),
    ("send", "Sends data on a connected socket."),
    ("recv", "Receives data from a connected socket or a bound connectionless socket."),
    ("gethostbyname", "Retrieves host information corresponding to a host name from a host database."),
    ("getaddrinfo", "Provides protocol-independent translation from an ANSI host name to an address."),
    ("inet_addr", "Converts a string containing an IPv4 dotted-decimal address into a proper address for the IN_ADDR structure."),
    ("InternetOpen", "Initializes an application's use of the WinINet functions."),
    ("InternetOpenUrl", "Opens a resource specified by a complete FTP or HTTP URL."),
    ("InternetConnect", "Opens an File Transfer Protocol (FTP) or HTTP session for a given site."),
    ("InternetReadFile", "Reads data from a handle opened by the InternetOpenUrl, FtpOpenFile, or HttpOpenRequest function."),
    ("InternetWriteFile", "Writes data to an open Internet file."),
    ("HttpOpenRequest", "Creates an HTTP request handle."),
    ("HttpSendRequest", "Sends the specified request to the HTTP server."),
    ("URLDownloadToFile", "Downloads bits from the Internet and saves them to a file."),
    ("WinHttpOpen", "Initializes, for an application, the use of WinHTTP functions and returns a WinHTTP-session handle."),
    ("WinHttpConnect", "Specifies the initial target server of an HTTP request and returns an HINTERNET connection handle."),
    ("WinHttpSendRequest", "Sends the specified request to the HTTP server."),
    ("DnsQuery", "Type-specific function that provides the DNS query interface."),

    // User interface, input and hooks
    ("SetWindowsHookEx", "Installs an application-defined hook procedure into a hook chain."),
    ("UnhookWindowsHookEx", "Removes a hook procedure installed in a hook chain by the SetWindowsHookEx function."),
    ("CallNextHookEx", "Passes the hook information to the next hook procedure in the current hook chain."),
    ("GetAsyncKeyState", "Determines whether a key is up or down at the time the function is called."),
    ("GetKeyState", "Retrieves the status of the specified virtual key."),
    ("GetForegroundWindow", "Retrieves a handle to the foreground window (the window with which the user is currently working)."),
    ("FindWindow", "Retrieves a handle to the top-level window whose class name and window name match the specified strings."),
    ("ShowWindow", "Sets the specified window's show state."),
    ("MessageBox", "Displays a modal dialog box that contains a system icon, a set of buttons, and a brief application-specific message."),
    ("GetClipboardData", "Retrieves data from the clipboard in a specified format."),
    ("BitBlt", "Performs a bit-block transfer of the color data corresponding to a rectangle of pixels from the specified source device context into a destination device context."),

    // System information
    ("GetVersionEx", "Retrieves information about the current operating system version."),
    ("GetSystemInfo", "Retrieves information about the current system."),
    ("GetComputerName", "Retrieves the NetBIOS name of the local computer."),
    ("GetUserName", "Retrieves the name of the user associated with the current thread."),
    ("GetTickCount", "Retrieves the number of milliseconds that have elapsed since the system was started, up to 49.7 days."),
    ("QueryPerformanceCounter", "Retrieves the current value of the performance counter, a high resolution time stamp that can be used for time-interval measurements."),
    ("GetLogicalDrives", "Retrieves a bitmask representing the currently available disk drives."),
    ("GetDriveType", "Determines whether a disk drive is a removable, fixed, CD-ROM, RAM disk, or network drive."),

    // Synchronisation
    ("CreateMutex", "Creates or opens a named or unnamed mutex object."),
    ("OpenMutex", "Opens an existing named mutex object."),
    ("CreateEvent", "Creates or opens a named or unnamed event object."),

    // Resources
    ("FindResource", "Determines the location of a resource with the specified type and name in the specified module."),
    ("LoadResource", "Retrieves a handle that can be used to obtain a pointer to the first byte of the specified resource in memory."),
    ("LockResource", "Retrieves a pointer to the specified resource in memory."),
    ("SizeofResource", "Retrieves the size, in bytes, of the specified resource."),
];
