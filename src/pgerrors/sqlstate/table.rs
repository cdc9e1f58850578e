use crate::pgerrors::sqlstate::{ErrorCategory, ErrorCode, ClassCode};
use crate::pgerrors::sqlstate::ErrorCategory::*;


/// ErrorTypeEntry maps a SQLSTATE to the short name and base category of the
/// error type that represents it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ErrorTypeEntry {
    pub code: ErrorCode,
    pub name: &'static str,
    pub category: ErrorCategory,
}

impl ErrorTypeEntry {
    pub const fn new(code: &str, name: &'static str, category: ErrorCategory) -> Self {
        ErrorTypeEntry {
            code: ErrorCode::new_unchecked(code),
            name,
            category,
        }
    }
}

/// ErrorClassEntry describes a SQLSTATE class (the first two characters of the code).
/// The category is what codes of this class map to when the code itself isn't in the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ErrorClassEntry {
    pub code: ClassCode,
    pub name: &'static str,
    pub category: ErrorCategory,
}

impl ErrorClassEntry {
    pub const fn new(code: &str, name: &'static str, category: ErrorCategory) -> Self {
        ErrorClassEntry {
            code: ClassCode::new_unchecked(code),
            name,
            category,
        }
    }
}

// Known Postgres error classes. The category is the fallback for unmapped codes of
// the class (the one most of its codes carry), not a base of the class type itself.
pub static ERROR_CLASSES: &[ErrorClassEntry] = &[
    ErrorClassEntry::new("00", "ClassSuccessfulCompletion", DatabaseError),
    ErrorClassEntry::new("01", "ClassWarning", DatabaseError),
    ErrorClassEntry::new("02", "ClassNoData", DatabaseError),
    ErrorClassEntry::new("03", "ClassSqlStatementNotYetComplete", DatabaseError),
    ErrorClassEntry::new("08", "ClassConnectionException", DatabaseError),
    ErrorClassEntry::new("09", "ClassTriggeredActionException", DatabaseError),
    ErrorClassEntry::new("0A", "ClassFeatureNotSupported", NotSupportedError),
    ErrorClassEntry::new("0B", "ClassInvalidTransactionInitiation", DatabaseError),
    ErrorClassEntry::new("0F", "ClassLocatorException", DatabaseError),
    ErrorClassEntry::new("0L", "ClassInvalidGrantor", DatabaseError),
    ErrorClassEntry::new("0P", "ClassInvalidRoleSpecification", DatabaseError),
    ErrorClassEntry::new("0Z", "ClassDiagnosticsException", DatabaseError),
    ErrorClassEntry::new("20", "ClassCaseNotFound", ProgrammingError),
    ErrorClassEntry::new("21", "ClassCardinalityViolation", ProgrammingError),
    ErrorClassEntry::new("22", "ClassDataException", DataError),
    ErrorClassEntry::new("23", "ClassIntegrityConstraintViolation", IntegrityError),
    ErrorClassEntry::new("24", "ClassInvalidCursorState", InternalError),
    ErrorClassEntry::new("25", "ClassInvalidTransactionState", InternalError),
    ErrorClassEntry::new("26", "ClassInvalidSqlStatementName", OperationalError),
    ErrorClassEntry::new("27", "ClassTriggeredDataChangeViolation", OperationalError),
    ErrorClassEntry::new("28", "ClassInvalidAuthorizationSpecification", OperationalError),
    ErrorClassEntry::new("2B", "ClassDependentPrivilegeDescriptorsStillExist", InternalError),
    ErrorClassEntry::new("2D", "ClassInvalidTransactionTermination", InternalError),
    ErrorClassEntry::new("2F", "ClassSqlRoutineException", InternalError),
    ErrorClassEntry::new("34", "ClassInvalidCursorName", OperationalError),
    ErrorClassEntry::new("38", "ClassExternalRoutineException", InternalError),
    ErrorClassEntry::new("39", "ClassExternalRoutineInvocationException", InternalError),
    ErrorClassEntry::new("3B", "ClassSavepointException", InternalError),
    ErrorClassEntry::new("3D", "ClassInvalidCatalogName", ProgrammingError),
    ErrorClassEntry::new("3F", "ClassInvalidSchemaName", ProgrammingError),
    ErrorClassEntry::new("40", "ClassTransactionRollback", TransactionRollbackError),
    ErrorClassEntry::new("42", "ClassSyntaxErrorOrAccessRuleViolation", ProgrammingError),
    ErrorClassEntry::new("44", "ClassWithCheckOptionViolation", ProgrammingError),
    ErrorClassEntry::new("53", "ClassInsufficientResources", OperationalError),
    ErrorClassEntry::new("54", "ClassProgramLimitExceeded", OperationalError),
    ErrorClassEntry::new("55", "ClassObjectNotInPrerequisiteState", OperationalError),
    ErrorClassEntry::new("57", "ClassOperatorIntervention", OperationalError),
    ErrorClassEntry::new("58", "ClassSystemError", OperationalError),
    ErrorClassEntry::new("F0", "ClassConfigurationFileError", InternalError),
    ErrorClassEntry::new("HV", "ClassForeignDataWrapperError", OperationalError),
    ErrorClassEntry::new("P0", "ClassPlPgsqlError", InternalError),
    ErrorClassEntry::new("XX", "ClassInternalError", InternalError),
];

// Known Postgres error codes, grouped by class
pub static ERROR_TABLE: &[ErrorTypeEntry] = &[
    // Class 00 - Successful Completion
    ErrorTypeEntry::new("00000", "SuccessfulCompletion", DatabaseError),
    // Class 01 - Warning
    ErrorTypeEntry::new("01000", "Warning", DatabaseError),
    ErrorTypeEntry::new("01003", "NullValueEliminatedInSetFunction", DatabaseError),
    ErrorTypeEntry::new("01006", "PrivilegeNotRevoked", DatabaseError),
    ErrorTypeEntry::new("01007", "PrivilegeNotGranted", DatabaseError),
    ErrorTypeEntry::new("01008", "ImplicitZeroBitPadding", DatabaseError),
    ErrorTypeEntry::new("0100C", "DynamicResultSetsReturned", DatabaseError),
    ErrorTypeEntry::new("01P01", "DeprecatedFeature", DatabaseError),
    // Class 02 - No Data
    ErrorTypeEntry::new("02000", "NoData", DatabaseError),
    ErrorTypeEntry::new("02001", "NoAdditionalDynamicResultSetsReturned", DatabaseError),
    // Class 03 - Sql Statement Not Yet Complete
    ErrorTypeEntry::new("03000", "SqlStatementNotYetComplete", DatabaseError),
    // Class 08 - Connection Exception
    ErrorTypeEntry::new("08000", "ConnectionException", DatabaseError),
    ErrorTypeEntry::new("08001", "SqlclientUnableToEstablishSqlconnection", DatabaseError),
    ErrorTypeEntry::new("08003", "ConnectionDoesNotExist", DatabaseError),
    ErrorTypeEntry::new("08004", "SqlserverRejectedEstablishmentOfSqlconnection", DatabaseError),
    ErrorTypeEntry::new("08006", "ConnectionFailure", DatabaseError),
    ErrorTypeEntry::new("08007", "TransactionResolutionUnknown", DatabaseError),
    ErrorTypeEntry::new("08P01", "ProtocolViolation", DatabaseError),
    // Class 09 - Triggered Action Exception
    ErrorTypeEntry::new("09000", "TriggeredActionException", DatabaseError),
    // Class 0A - Feature Not Supported
    ErrorTypeEntry::new("0A000", "FeatureNotSupported", NotSupportedError),
    // Class 0B - Invalid Transaction Initiation
    ErrorTypeEntry::new("0B000", "InvalidTransactionInitiation", DatabaseError),
    // Class 0F - Locator Exception
    ErrorTypeEntry::new("0F000", "LocatorException", DatabaseError),
    ErrorTypeEntry::new("0F001", "InvalidLocatorSpecification", DatabaseError),
    // Class 0L - Invalid Grantor
    ErrorTypeEntry::new("0L000", "InvalidGrantor", DatabaseError),
    ErrorTypeEntry::new("0LP01", "InvalidGrantOperation", DatabaseError),
    // Class 0P - Invalid Role Specification
    ErrorTypeEntry::new("0P000", "InvalidRoleSpecification", DatabaseError),
    // Class 0Z - Diagnostics Exception
    ErrorTypeEntry::new("0Z000", "DiagnosticsException", DatabaseError),
    ErrorTypeEntry::new("0Z002", "StackedDiagnosticsAccessedWithoutActiveHandler", DatabaseError),
    // Class 20 - Case Not Found
    ErrorTypeEntry::new("20000", "CaseNotFound", ProgrammingError),
    // Class 21 - Cardinality Violation
    ErrorTypeEntry::new("21000", "CardinalityViolation", ProgrammingError),
    // Class 22 - Data Exception
    ErrorTypeEntry::new("22000", "DataException", DataError),
    ErrorTypeEntry::new("22001", "StringDataRightTruncation", DataError),
    ErrorTypeEntry::new("22002", "NullValueNoIndicatorParameter", DataError),
    ErrorTypeEntry::new("22003", "NumericValueOutOfRange", DataError),
    ErrorTypeEntry::new("22005", "ErrorInAssignment", DataError),
    ErrorTypeEntry::new("22007", "InvalidDatetimeFormat", DataError),
    ErrorTypeEntry::new("22008", "DatetimeFieldOverflow", DataError),
    ErrorTypeEntry::new("22009", "InvalidTimeZoneDisplacementValue", DataError),
    ErrorTypeEntry::new("2200B", "EscapeCharacterConflict", DataError),
    ErrorTypeEntry::new("2200C", "InvalidUseOfEscapeCharacter", DataError),
    ErrorTypeEntry::new("2200D", "InvalidEscapeOctet", DataError),
    ErrorTypeEntry::new("2200F", "ZeroLengthCharacterString", DataError),
    ErrorTypeEntry::new("2200G", "MostSpecificTypeMismatch", DataError),
    ErrorTypeEntry::new("2200L", "NotAnXmlDocument", DataError),
    ErrorTypeEntry::new("2200M", "InvalidXmlDocument", DataError),
    ErrorTypeEntry::new("2200N", "InvalidXmlContent", DataError),
    ErrorTypeEntry::new("2200S", "InvalidXmlComment", DataError),
    ErrorTypeEntry::new("2200T", "InvalidXmlProcessingInstruction", DataError),
    ErrorTypeEntry::new("22010", "InvalidIndicatorParameterValue", DataError),
    ErrorTypeEntry::new("22011", "SubstringError", DataError),
    ErrorTypeEntry::new("22012", "DivisionByZero", DataError),
    ErrorTypeEntry::new("22014", "InvalidArgumentForNtileFunction", DataError),
    ErrorTypeEntry::new("22015", "IntervalFieldOverflow", DataError),
    ErrorTypeEntry::new("22016", "InvalidArgumentForNthValueFunction", DataError),
    ErrorTypeEntry::new("22018", "InvalidCharacterValueForCast", DataError),
    ErrorTypeEntry::new("22019", "InvalidEscapeCharacter", DataError),
    ErrorTypeEntry::new("2201B", "InvalidRegularExpression", DataError),
    ErrorTypeEntry::new("2201E", "InvalidArgumentForLogarithm", DataError),
    ErrorTypeEntry::new("2201F", "InvalidArgumentForPowerFunction", DataError),
    ErrorTypeEntry::new("2201G", "InvalidArgumentForWidthBucketFunction", DataError),
    ErrorTypeEntry::new("2201W", "InvalidRowCountInLimitClause", DataError),
    ErrorTypeEntry::new("2201X", "InvalidRowCountInResultOffsetClause", DataError),
    ErrorTypeEntry::new("22020", "InvalidLimitValue", DataError),
    ErrorTypeEntry::new("22021", "CharacterNotInRepertoire", DataError),
    ErrorTypeEntry::new("22022", "IndicatorOverflow", DataError),
    ErrorTypeEntry::new("22023", "InvalidParameterValue", DataError),
    ErrorTypeEntry::new("22024", "UnterminatedCString", DataError),
    ErrorTypeEntry::new("22025", "InvalidEscapeSequence", DataError),
    ErrorTypeEntry::new("22026", "StringDataLengthMismatch", DataError),
    ErrorTypeEntry::new("22027", "TrimError", DataError),
    ErrorTypeEntry::new("2202E", "ArraySubscriptError", DataError),
    ErrorTypeEntry::new("22P01", "FloatingPointException", DataError),
    ErrorTypeEntry::new("22P02", "InvalidTextRepresentation", DataError),
    ErrorTypeEntry::new("22P03", "InvalidBinaryRepresentation", DataError),
    ErrorTypeEntry::new("22P04", "BadCopyFileFormat", DataError),
    ErrorTypeEntry::new("22P05", "UntranslatableCharacter", DataError),
    ErrorTypeEntry::new("22P06", "NonstandardUseOfEscapeCharacter", DataError),
    // Class 23 - Integrity Constraint Violation
    ErrorTypeEntry::new("23000", "IntegrityConstraintViolation", IntegrityError),
    ErrorTypeEntry::new("23001", "RestrictViolation", IntegrityError),
    ErrorTypeEntry::new("23502", "NotNullViolation", IntegrityError),
    ErrorTypeEntry::new("23503", "ForeignKeyViolation", IntegrityError),
    ErrorTypeEntry::new("23505", "UniqueViolation", IntegrityError),
    ErrorTypeEntry::new("23514", "CheckViolation", IntegrityError),
    ErrorTypeEntry::new("23P01", "ExclusionViolation", IntegrityError),
    // Class 24 - Invalid Cursor State
    ErrorTypeEntry::new("24000", "InvalidCursorState", InternalError),
    // Class 25 - Invalid Transaction State
    ErrorTypeEntry::new("25000", "InvalidTransactionState", InternalError),
    ErrorTypeEntry::new("25001", "ActiveSqlTransaction", InternalError),
    ErrorTypeEntry::new("25002", "BranchTransactionAlreadyActive", InternalError),
    ErrorTypeEntry::new("25003", "InappropriateAccessModeForBranchTransaction", InternalError),
    ErrorTypeEntry::new("25004", "InappropriateIsolationLevelForBranchTransaction", InternalError),
    ErrorTypeEntry::new("25005", "NoActiveSqlTransactionForBranchTransaction", InternalError),
    ErrorTypeEntry::new("25006", "ReadOnlySqlTransaction", InternalError),
    ErrorTypeEntry::new("25007", "SchemaAndDataStatementMixingNotSupported", InternalError),
    ErrorTypeEntry::new("25008", "HeldCursorRequiresSameIsolationLevel", InternalError),
    ErrorTypeEntry::new("25P01", "NoActiveSqlTransaction", InternalError),
    ErrorTypeEntry::new("25P02", "InFailedSqlTransaction", InternalError),
    // Class 26 - Invalid Sql Statement Name
    ErrorTypeEntry::new("26000", "InvalidSqlStatementName", OperationalError),
    // Class 27 - Triggered Data Change Violation
    ErrorTypeEntry::new("27000", "TriggeredDataChangeViolation", OperationalError),
    // Class 28 - Invalid Authorization Specification
    ErrorTypeEntry::new("28000", "InvalidAuthorizationSpecification", OperationalError),
    ErrorTypeEntry::new("28P01", "InvalidPassword", OperationalError),
    // Class 2B - Dependent Privilege Descriptors Still Exist
    ErrorTypeEntry::new("2B000", "DependentPrivilegeDescriptorsStillExist", InternalError),
    ErrorTypeEntry::new("2BP01", "DependentObjectsStillExist", InternalError),
    // Class 2D - Invalid Transaction Termination
    ErrorTypeEntry::new("2D000", "InvalidTransactionTermination", InternalError),
    // Class 2F - Sql Routine Exception
    ErrorTypeEntry::new("2F000", "SqlRoutineException", InternalError),
    ErrorTypeEntry::new("2F005", "FunctionExecutedNoReturnStatement", InternalError),
    // Class 34 - Invalid Cursor Name
    ErrorTypeEntry::new("34000", "InvalidCursorName", OperationalError),
    // Class 38 - External Routine Exception
    ErrorTypeEntry::new("38000", "ExternalRoutineException", InternalError),
    ErrorTypeEntry::new("38001", "ContainingSqlNotPermitted", InternalError),
    ErrorTypeEntry::new("38002", "ModifyingSqlDataNotPermitted", InternalError),
    ErrorTypeEntry::new("38003", "ProhibitedSqlStatementAttempted", InternalError),
    ErrorTypeEntry::new("38004", "ReadingSqlDataNotPermitted", InternalError),
    // Class 39 - External Routine Invocation Exception
    ErrorTypeEntry::new("39000", "ExternalRoutineInvocationException", InternalError),
    ErrorTypeEntry::new("39001", "InvalidSqlstateReturned", InternalError),
    ErrorTypeEntry::new("39004", "NullValueNotAllowed", InternalError),
    ErrorTypeEntry::new("39P01", "TriggerProtocolViolated", InternalError),
    ErrorTypeEntry::new("39P02", "SrfProtocolViolated", InternalError),
    // Class 3B - Savepoint Exception
    ErrorTypeEntry::new("3B000", "SavepointException", InternalError),
    ErrorTypeEntry::new("3B001", "InvalidSavepointSpecification", InternalError),
    // Class 3D - Invalid Catalog Name
    ErrorTypeEntry::new("3D000", "InvalidCatalogName", ProgrammingError),
    // Class 3F - Invalid Schema Name
    ErrorTypeEntry::new("3F000", "InvalidSchemaName", ProgrammingError),
    // Class 40 - Transaction Rollback
    ErrorTypeEntry::new("40000", "TransactionRollback", TransactionRollbackError),
    ErrorTypeEntry::new("40001", "SerializationFailure", TransactionRollbackError),
    ErrorTypeEntry::new("40002", "TransactionIntegrityConstraintViolation", TransactionRollbackError),
    ErrorTypeEntry::new("40003", "StatementCompletionUnknown", TransactionRollbackError),
    ErrorTypeEntry::new("40P01", "DeadlockDetected", TransactionRollbackError),
    // Class 42 - Syntax Error Or Access Rule Violation
    ErrorTypeEntry::new("42000", "SyntaxErrorOrAccessRuleViolation", ProgrammingError),
    ErrorTypeEntry::new("42501", "InsufficientPrivilege", ProgrammingError),
    ErrorTypeEntry::new("42601", "SyntaxError", ProgrammingError),
    ErrorTypeEntry::new("42602", "InvalidName", ProgrammingError),
    ErrorTypeEntry::new("42611", "InvalidColumnDefinition", ProgrammingError),
    ErrorTypeEntry::new("42622", "NameTooLong", ProgrammingError),
    ErrorTypeEntry::new("42701", "DuplicateColumn", ProgrammingError),
    ErrorTypeEntry::new("42702", "AmbiguousColumn", ProgrammingError),
    ErrorTypeEntry::new("42703", "UndefinedColumn", ProgrammingError),
    ErrorTypeEntry::new("42704", "UndefinedObject", ProgrammingError),
    ErrorTypeEntry::new("42710", "DuplicateObject", ProgrammingError),
    ErrorTypeEntry::new("42712", "DuplicateAlias", ProgrammingError),
    ErrorTypeEntry::new("42723", "DuplicateFunction", ProgrammingError),
    ErrorTypeEntry::new("42725", "AmbiguousFunction", ProgrammingError),
    ErrorTypeEntry::new("42803", "GroupingError", ProgrammingError),
    ErrorTypeEntry::new("42804", "DatatypeMismatch", ProgrammingError),
    ErrorTypeEntry::new("42809", "WrongObjectType", ProgrammingError),
    ErrorTypeEntry::new("42830", "InvalidForeignKey", ProgrammingError),
    ErrorTypeEntry::new("42846", "CannotCoerce", ProgrammingError),
    ErrorTypeEntry::new("42883", "UndefinedFunction", ProgrammingError),
    ErrorTypeEntry::new("42939", "ReservedName", ProgrammingError),
    ErrorTypeEntry::new("42P01", "UndefinedTable", ProgrammingError),
    ErrorTypeEntry::new("42P02", "UndefinedParameter", ProgrammingError),
    ErrorTypeEntry::new("42P03", "DuplicateCursor", ProgrammingError),
    ErrorTypeEntry::new("42P04", "DuplicateDatabase", ProgrammingError),
    ErrorTypeEntry::new("42P05", "DuplicatePreparedStatement", ProgrammingError),
    ErrorTypeEntry::new("42P06", "DuplicateSchema", ProgrammingError),
    ErrorTypeEntry::new("42P07", "DuplicateTable", ProgrammingError),
    ErrorTypeEntry::new("42P08", "AmbiguousParameter", ProgrammingError),
    ErrorTypeEntry::new("42P09", "AmbiguousAlias", ProgrammingError),
    ErrorTypeEntry::new("42P10", "InvalidColumnReference", ProgrammingError),
    ErrorTypeEntry::new("42P11", "InvalidCursorDefinition", ProgrammingError),
    ErrorTypeEntry::new("42P12", "InvalidDatabaseDefinition", ProgrammingError),
    ErrorTypeEntry::new("42P13", "InvalidFunctionDefinition", ProgrammingError),
    ErrorTypeEntry::new("42P14", "InvalidPreparedStatementDefinition", ProgrammingError),
    ErrorTypeEntry::new("42P15", "InvalidSchemaDefinition", ProgrammingError),
    ErrorTypeEntry::new("42P16", "InvalidTableDefinition", ProgrammingError),
    ErrorTypeEntry::new("42P17", "InvalidObjectDefinition", ProgrammingError),
    ErrorTypeEntry::new("42P18", "IndeterminateDatatype", ProgrammingError),
    ErrorTypeEntry::new("42P19", "InvalidRecursion", ProgrammingError),
    ErrorTypeEntry::new("42P20", "WindowingError", ProgrammingError),
    ErrorTypeEntry::new("42P21", "CollationMismatch", ProgrammingError),
    ErrorTypeEntry::new("42P22", "IndeterminateCollation", ProgrammingError),
    // Class 44 - With Check Option Violation
    ErrorTypeEntry::new("44000", "WithCheckOptionViolation", ProgrammingError),
    // Class 53 - Insufficient Resources
    ErrorTypeEntry::new("53000", "InsufficientResources", OperationalError),
    ErrorTypeEntry::new("53100", "DiskFull", OperationalError),
    ErrorTypeEntry::new("53200", "OutOfMemory", OperationalError),
    ErrorTypeEntry::new("53300", "TooManyConnections", OperationalError),
    ErrorTypeEntry::new("53400", "ConfigurationLimitExceeded", OperationalError),
    // Class 54 - Program Limit Exceeded
    ErrorTypeEntry::new("54000", "ProgramLimitExceeded", OperationalError),
    ErrorTypeEntry::new("54001", "StatementTooComplex", OperationalError),
    ErrorTypeEntry::new("54011", "TooManyColumns", OperationalError),
    ErrorTypeEntry::new("54023", "TooManyArguments", OperationalError),
    // Class 55 - Object Not In Prerequisite State
    ErrorTypeEntry::new("55000", "ObjectNotInPrerequisiteState", OperationalError),
    ErrorTypeEntry::new("55006", "ObjectInUse", OperationalError),
    ErrorTypeEntry::new("55P02", "CantChangeRuntimeParam", OperationalError),
    ErrorTypeEntry::new("55P03", "LockNotAvailable", OperationalError),
    // Class 57 - Operator Intervention
    ErrorTypeEntry::new("57000", "OperatorIntervention", OperationalError),
    ErrorTypeEntry::new("57014", "QueryCanceled", QueryCanceledError),
    ErrorTypeEntry::new("57P01", "AdminShutdown", OperationalError),
    ErrorTypeEntry::new("57P02", "CrashShutdown", OperationalError),
    ErrorTypeEntry::new("57P03", "CannotConnectNow", OperationalError),
    ErrorTypeEntry::new("57P04", "DatabaseDropped", OperationalError),
    // Class 58 - System Error
    ErrorTypeEntry::new("58000", "SystemError", OperationalError),
    ErrorTypeEntry::new("58030", "IoError", OperationalError),
    ErrorTypeEntry::new("58P01", "UndefinedFile", OperationalError),
    ErrorTypeEntry::new("58P02", "DuplicateFile", OperationalError),
    // Class F0 - Configuration File Error
    ErrorTypeEntry::new("F0000", "ConfigFileError", InternalError),
    ErrorTypeEntry::new("F0001", "LockFileExists", InternalError),
    // Class HV - Foreign Data Wrapper Error
    ErrorTypeEntry::new("HV000", "FdwError", OperationalError),
    ErrorTypeEntry::new("HV001", "FdwOutOfMemory", OperationalError),
    ErrorTypeEntry::new("HV002", "FdwDynamicParameterValueNeeded", OperationalError),
    ErrorTypeEntry::new("HV004", "FdwInvalidDataType", OperationalError),
    ErrorTypeEntry::new("HV005", "FdwColumnNameNotFound", OperationalError),
    ErrorTypeEntry::new("HV006", "FdwInvalidDataTypeDescriptors", OperationalError),
    ErrorTypeEntry::new("HV007", "FdwInvalidColumnName", OperationalError),
    ErrorTypeEntry::new("HV008", "FdwInvalidColumnNumber", OperationalError),
    ErrorTypeEntry::new("HV009", "FdwInvalidUseOfNullPointer", OperationalError),
    ErrorTypeEntry::new("HV00A", "FdwInvalidStringFormat", OperationalError),
    ErrorTypeEntry::new("HV00B", "FdwInvalidHandle", OperationalError),
    ErrorTypeEntry::new("HV00C", "FdwInvalidOptionIndex", OperationalError),
    ErrorTypeEntry::new("HV00D", "FdwInvalidOptionName", OperationalError),
    ErrorTypeEntry::new("HV00J", "FdwOptionNameNotFound", OperationalError),
    ErrorTypeEntry::new("HV00K", "FdwReplyHandle", OperationalError),
    ErrorTypeEntry::new("HV00L", "FdwUnableToCreateExecution", OperationalError),
    ErrorTypeEntry::new("HV00M", "FdwUnableToCreateReply", OperationalError),
    ErrorTypeEntry::new("HV00N", "FdwUnableToEstablishConnection", OperationalError),
    ErrorTypeEntry::new("HV00P", "FdwNoSchemas", OperationalError),
    ErrorTypeEntry::new("HV00Q", "FdwSchemaNotFound", OperationalError),
    ErrorTypeEntry::new("HV00R", "FdwTableNotFound", OperationalError),
    ErrorTypeEntry::new("HV010", "FdwFunctionSequenceError", OperationalError),
    ErrorTypeEntry::new("HV014", "FdwTooManyHandles", OperationalError),
    ErrorTypeEntry::new("HV021", "FdwInconsistentDescriptorInformation", OperationalError),
    ErrorTypeEntry::new("HV024", "FdwInvalidAttributeValue", OperationalError),
    ErrorTypeEntry::new("HV090", "FdwInvalidStringLengthOrBufferLength", OperationalError),
    ErrorTypeEntry::new("HV091", "FdwInvalidDescriptorFieldIdentifier", OperationalError),
    // Class P0 - Pl Pgsql Error
    ErrorTypeEntry::new("P0000", "PlpgsqlError", InternalError),
    ErrorTypeEntry::new("P0001", "RaiseException", InternalError),
    ErrorTypeEntry::new("P0002", "NoDataFound", InternalError),
    ErrorTypeEntry::new("P0003", "TooManyRows", InternalError),
    // Class XX - Internal Error
    ErrorTypeEntry::new("XX000", "InternalError", InternalError),
    ErrorTypeEntry::new("XX001", "DataCorrupted", InternalError),
    ErrorTypeEntry::new("XX002", "IndexCorrupted", InternalError),
];

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashSet;

    use crate::pgerrors::sqlstate::is_identifier;

    #[test]
    fn test_codes_and_names_unique() {
        let mut codes = FnvHashSet::default();
        let mut names = FnvHashSet::default();
        for entry in ERROR_TABLE {
            assert!(entry.code.check().is_ok(), "{:?}", entry);
            assert!(codes.insert(entry.code), "duplicate code {}", entry.code);
            assert!(names.insert(entry.name), "duplicate name {}", entry.name);
            assert!(is_identifier(entry.name), "{}", entry.name);
        }
        for class in ERROR_CLASSES {
            assert!(class.code.check().is_ok(), "{:?}", class);
            assert!(names.insert(class.name), "duplicate name {}", class.name);
        }
    }

    #[test]
    fn test_class_fallback_is_most_common_category() {
        for class in ERROR_CLASSES {
            let mut counts = fnv::FnvHashMap::<ErrorCategory, usize>::default();
            for entry in ERROR_TABLE.iter().filter(|e| e.code.class() == class.code) {
                *counts.entry(entry.category).or_default() += 1;
            }
            let most = counts.values().copied().max().unwrap_or(0);
            assert!(most > 0, "class {} has no codes", class.code);
            assert_eq!(counts.get(&class.category).copied(), Some(most), "class {}", class.code);
        }
    }

    #[test]
    fn test_every_code_has_a_known_class() {
        let classes: FnvHashSet<_> = ERROR_CLASSES.iter().map(|c| c.code).collect();
        for entry in ERROR_TABLE {
            assert!(classes.contains(&entry.code.class()), "no class for {}", entry.code);
        }
    }

    #[test]
    fn test_known_entries() {
        let find = |code: &str| ERROR_TABLE.iter().find(|e| e.code.as_str() == code).copied();
        assert_eq!(
            find("55P03"),
            Some(ErrorTypeEntry::new("55P03", "LockNotAvailable", OperationalError)));
        assert_eq!(find("57014").map(|e| e.category), Some(QueryCanceledError));
        assert_eq!(find("40001").map(|e| e.name), Some("SerializationFailure"));
        assert_eq!(find("23505").map(|e| e.category), Some(IntegrityError));
        assert_eq!(ERROR_TABLE.len(), 228);
        assert_eq!(ERROR_CLASSES.len(), 42);
    }
}
