//! Keyword tables for identifier classification.
//!
//! Three tables:
//! 1. **Instructions** — opcode mnemonics (`add`, `load`, `getelementptr`)
//! 2. **Type names** — non-integer type keywords (`float`, `void`, `label`)
//! 3. **General keywords** — directives, linkage, visibility, calling
//!    conventions, attributes, orderings, predicates and constants
//!
//! Integer types (`i1`, `i32`, ...) are not listed; the scanner recognizes
//! them by shape before consulting the tables.
//!
//! # Ordering
//!
//! Each table is sorted by ordinal byte comparison and de-duplicated when it
//! is first used, so lookups are a binary search. The source word lists do
//! not have to be kept in order by hand, and repeats are harmless. Tables are
//! never mutated after construction and can be read from any thread.

use std::sync::LazyLock;

use crate::TokenCategory;

/// Sorted, de-duplicated set of keywords.
#[derive(Debug)]
pub struct KeywordTable {
    words: Vec<&'static str>,
}

impl KeywordTable {
    fn build(name: &'static str, words: &[&'static str]) -> Self {
        let mut words = words.to_vec();
        words.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
        words.dedup();
        tracing::debug!(table = name, count = words.len(), "built keyword table");
        KeywordTable { words }
    }

    /// Exact, case-sensitive membership test.
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_bytes().cmp(text.as_bytes()))
            .is_ok()
    }

    /// Returns `true` if the table is strictly ascending by byte value.
    pub fn is_sorted(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| pair[0].as_bytes() < pair[1].as_bytes())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

static INSTRUCTIONS: LazyLock<KeywordTable> =
    LazyLock::new(|| KeywordTable::build("instructions", INSTRUCTION_WORDS));
static TYPE_NAMES: LazyLock<KeywordTable> =
    LazyLock::new(|| KeywordTable::build("type_names", TYPE_WORDS));
static GENERAL: LazyLock<KeywordTable> =
    LazyLock::new(|| KeywordTable::build("general", GENERAL_WORDS));

pub fn instructions() -> &'static KeywordTable {
    &INSTRUCTIONS
}

pub fn type_names() -> &'static KeywordTable {
    &TYPE_NAMES
}

pub fn general() -> &'static KeywordTable {
    &GENERAL
}

/// Look up `text` in the keyword tables.
///
/// Checked in order general keywords, type names, instructions; the first
/// table containing `text` decides the category.
#[inline]
pub fn lookup(text: &str) -> Option<TokenCategory> {
    if general().contains(text) {
        Some(TokenCategory::Keyword)
    } else if type_names().contains(text) {
        Some(TokenCategory::TypeName)
    } else if instructions().contains(text) {
        Some(TokenCategory::Instruction)
    } else {
        None
    }
}

#[rustfmt::skip]
const INSTRUCTION_WORDS: &[&str] = &[
    // Terminators
    "ret", "br", "switch", "indirectbr", "invoke", "resume", "unreachable",
    "cleanupret", "catchret", "catchswitch", "callbr",
    // Unary / binary
    "fneg", "add", "fadd", "sub", "fsub", "mul", "fmul", "udiv", "sdiv", "fdiv",
    "urem", "srem", "frem",
    // Bitwise
    "shl", "lshr", "ashr", "and", "or", "xor",
    // Vector / aggregate
    "extractelement", "insertelement", "shufflevector", "extractvalue",
    "insertvalue",
    // Memory
    "alloca", "load", "store", "fence", "cmpxchg", "atomicrmw", "getelementptr",
    // Conversions
    "trunc", "zext", "sext", "fptrunc", "fpext", "fptoui", "fptosi", "uitofp",
    "sitofp", "ptrtoint", "inttoptr", "bitcast", "addrspacecast",
    // Other
    "icmp", "fcmp", "phi", "select", "call", "va_arg", "landingpad",
    "catchpad", "cleanuppad", "freeze",
];

#[rustfmt::skip]
const TYPE_WORDS: &[&str] = &[
    "void", "half", "bfloat", "float", "double", "x86_fp80", "fp128",
    "ppc_fp128", "x86_mmx", "x86_amx", "label", "metadata", "token", "opaque",
    "type", "ptr",
];

#[rustfmt::skip]
const GENERAL_WORDS: &[&str] = &[
    // Constants
    "true", "false", "null", "undef", "poison", "zeroinitializer", "none",
    "blockaddress", "dso_local_equivalent", "no_cfi",
    // Top-level entities
    "declare", "define", "global", "constant", "alias", "ifunc", "comdat",
    "attributes", "module", "asm", "target", "triple", "datalayout",
    "source_filename", "section", "partition", "gc", "prefix", "prologue",
    "personality", "uselistorder", "uselistorder_bb", "distinct",
    // Linkage
    "private", "internal", "available_externally", "linkonce",
    "linkonce_odr", "weak", "weak_odr", "appending", "common", "extern_weak",
    "external",
    // Visibility / storage
    "default", "hidden", "protected", "dllimport", "dllexport", "dso_local",
    "dso_preemptable", "unnamed_addr", "local_unnamed_addr",
    "externally_initialized", "thread_local", "localdynamic", "initialexec",
    "localexec", "addrspace", "align",
    // Comdat selection kinds
    "any", "exactmatch", "largest", "nodeduplicate", "noduplicates",
    "samesize",
    // Calling conventions
    "ccc", "fastcc", "coldcc", "cc", "webkit_jscc", "anyregcc",
    "preserve_mostcc", "preserve_allcc", "swiftcc", "tailcc", "cfguard_checkcc",
    "x86_stdcallcc", "x86_fastcallcc", "x86_thiscallcc", "x86_vectorcallcc",
    "x86_regcallcc", "x86_64_sysvcc", "win64cc", "arm_apcscc", "arm_aapcscc",
    "arm_aapcs_vfpcc", "spir_kernel", "spir_func", "intel_ocl_bicc",
    "amdgpu_vs", "amdgpu_gs", "amdgpu_ps", "amdgpu_cs", "amdgpu_kernel",
    // Parameter attributes
    "zeroext", "signext", "inreg", "byval", "byref", "inalloca", "preallocated",
    "sret", "noalias", "nocapture", "nofree", "nest", "returned", "nonnull",
    "dereferenceable", "dereferenceable_or_null", "swiftself", "swifterror",
    "immarg", "noundef", "elementtype", "align", "alignstack",
    // Function attributes
    "alwaysinline", "argmemonly", "builtin", "cold", "convergent", "hot",
    "inaccessiblememonly", "inaccessiblemem_or_argmemonly", "inlinehint",
    "jumptable", "minsize", "mustprogress", "naked", "nobuiltin", "nocallback",
    "noduplicate", "noimplicitfloat", "noinline", "nomerge", "nonlazybind",
    "noprofile", "noredzone", "noreturn", "norecurse", "nosync", "nounwind",
    "null_pointer_is_valid", "optforfuzzing", "optnone", "optsize", "readnone",
    "readonly", "writeonly", "returns_twice", "safestack", "sanitize_address",
    "sanitize_hwaddress", "sanitize_memory", "sanitize_memtag",
    "sanitize_thread", "speculatable", "speculative_load_hardening", "ssp",
    "sspreq", "sspstrong", "strictfp", "uwtable", "willreturn", "allocsize",
    "memory", "vscale_range",
    // Instruction modifiers
    "to", "tail", "musttail", "notail", "volatile", "inbounds", "inrange",
    "nuw", "nsw", "exact", "disjoint", "nneg", "x", "vscale", "within", "from",
    "caller", "unwind", "cleanup", "catch", "filter", "sideeffect",
    "inteldialect",
    // Fast-math flags
    "nnan", "ninf", "nsz", "arcp", "contract", "afn", "reassoc", "fast",
    // Atomics
    "atomic", "unordered", "monotonic", "acquire", "release", "acq_rel",
    "seq_cst", "singlethread", "syncscope", "weak",
    // atomicrmw operations
    "xchg", "nand", "max", "min", "umax", "umin", "fmax", "fmin",
    "uinc_wrap", "udec_wrap",
    // icmp predicates
    "eq", "ne", "ugt", "uge", "ult", "ule", "sgt", "sge", "slt", "sle",
    // fcmp predicates
    "oeq", "ogt", "oge", "olt", "ole", "one", "ord", "ueq", "une", "uno",
];
