//! Registry of Spanish bank codes (código de entidad).
//!
//! Maps each registered 4-digit bank code to its display name and BIC
//! (ISO 9362). The table is embedded and read-only; it is searched with
//! binary search, so it must stay sorted by code.

use rand::Rng;
use serde::Serialize;

/// A registered Spanish bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankEntry {
    code: &'static str,
    name: &'static str,
    bic: &'static str,
}

impl BankEntry {
    const fn new(code: &'static str, name: &'static str, bic: &'static str) -> Self {
        Self { code, name, bic }
    }

    /// The 4-digit, zero-padded bank code (e.g. "1465").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Display name (e.g. "ING-DIRECT").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// BIC / ISO 9362 code, `None` when the registry has no BIC for this bank.
    pub fn bic(&self) -> Option<&'static str> {
        if self.bic.is_empty() {
            None
        } else {
            Some(self.bic)
        }
    }
}

/// Look up a bank by its 4-digit code.
pub fn lookup(code: &str) -> Option<&'static BankEntry> {
    BANKS
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &BANKS[idx])
}

/// Check whether `code` is a registered bank code.
pub fn is_known_bank_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// All registered banks, ordered by code.
pub fn banks() -> impl Iterator<Item = &'static BankEntry> {
    BANKS.iter()
}

/// Pick a registered bank uniformly at random.
pub fn random_bank<R: Rng + ?Sized>(rng: &mut R) -> &'static BankEntry {
    &BANKS[rng.gen_range(0..BANKS.len())]
}

/// Registered Spanish banks. Sorted by code for binary search.
static BANKS: &[BankEntry] = &[
    BankEntry::new("0003", "BANCO-DEPOSITOS", "BDEPESM1XXX"),
    BankEntry::new("0011", "ALLFUNDS-BANK", "ALLFESMMXXX"),
    BankEntry::new("0019", "DEUTSCHE-BANK", "DEUTESBBXXX"),
    BankEntry::new("0031", "BANCO-ETCHEVARRIA", "ETCHES2GXXX"),
    BankEntry::new("0036", "SANTANDER-IVESTMENT", "SABNESMMXXX"),
    BankEntry::new("0038", "SANTANDER-BANCO-EMISIONES", "BSCHESMMXXX"),
    BankEntry::new("0046", "BANCO-GALLEGO", "GALEES2GXXX"),
    BankEntry::new("0049", "BANCO-SANTANDER", "BSCHESMMXXX"),
    BankEntry::new("0057", "BANCO-DEPOSITARIO-BBVA", "BVADESMMXXX"),
    BankEntry::new("0058", "BNP-PARIBAS", "BNPAESMMXXX"),
    BankEntry::new("0059", "BANCO-MADRID", "MADRESMMXXX"),
    BankEntry::new("0061", "BANCA-MARCH", "BMARES2MXXX"),
    BankEntry::new("0065", "BLARCLAYS-BANK", "BARCESMMXXX"),
    BankEntry::new("0073", "OPEN-BANK", "OPENESMMXXX"),
    BankEntry::new("0075", "BANCO-POPULAR", "POPUESMMXXX"),
    BankEntry::new("0078", "BANCO-PUEYO", "BAPUES22XXX"),
    BankEntry::new("0081", "BANCO-SABADELL", "BSABESBBXXX"),
    BankEntry::new("0083", "RENTA4", "RENBESMMXXX"),
    BankEntry::new("0094", "RBC-INVESTOR", "BVALESMMXXX"),
    BankEntry::new("0108", "SOCIETE-GENERALE", "SOGEESMMXXX"),
    BankEntry::new("0113", "BANCO-INDUSTRIAL-BILBAO", "INBBESM1XXX"),
    BankEntry::new("0115", "BANCO-CASTILLA-LAMANCHA", "CECAESMM115"),
    BankEntry::new("0121", "BANCO-OCCIDENTAL", "OCBAESM1XXX"),
    BankEntry::new("0122", "CITIBANK", "CITIES2XXXX"),
    BankEntry::new("0125", "BANCOFAR", "BAOFESM1XXX"),
    BankEntry::new("0128", "BANKINTER", "BKBKESMMXXX"),
    BankEntry::new("0130", "BANCO-CAIXA-GRAL", "CGDIESMMXXX"),
    BankEntry::new("0131", "BANCO-ESPIRITO-SANTO", "BESMESMMXXX"),
    BankEntry::new("0132", "BANCO-PROMOCION-NEGOCIOS", "PRNEESM1XXX"),
    BankEntry::new("0133", "NUEVO-MICROBANK", "MIKBESB1XXX"),
    BankEntry::new("0136", "ARESBANK", "AREBESMMXXX"),
    BankEntry::new("0138", "BANKOA", "BKOAES22XXX"),
    BankEntry::new("0144", "BNP-PARIBAS-SECURITES", "PARBESMXXXX"),
    BankEntry::new("0149", "BNP-SUCURSLA-ESPANA", "BNPAESMSXXX"),
    BankEntry::new("0151", "JPMORGAN", "CHASESM3XXX"),
    BankEntry::new("0152", "BARCLAYS-BANK", "BPLCESMMXXX"),
    BankEntry::new("0154", "CREDIT-AGRICOLE-INVETBANK", "BSUIESMMXXX"),
    BankEntry::new("0155", "BANCO-DO-BRASIL", "BRASESMMXXX"),
    BankEntry::new("0156", "ROYAL-BANK-SCOTLAND", "ABNAESMMXXX"),
    BankEntry::new("0159", "COMMERZBANK", "COBAESMXXXX"),
    BankEntry::new("0160", "BANK-OF-TOKYO", "BOTKESMXXXX"),
    BankEntry::new("0161", "DEUTSCHE-BANK-AMERICAS", "BKTRESM1XXX"),
    BankEntry::new("0162", "HSBC-BANK", "MIDLESMMXXX"),
    BankEntry::new("0167", "BNP-PARIBAS-FORTIS", "GEBAESMMXXX"),
    BankEntry::new("0168", "ING-BELGIUM", "BBRUESMXXXX"),
    BankEntry::new("0169", "BANCO-NACION-ARGENTINA", "NACNESMMXXX"),
    BankEntry::new("0182", "BBVA", "BBVAESMMXXX"),
    BankEntry::new("0184", "BANCO-EUROPEO-FINANZAS", "BEDFESM1XXX"),
    BankEntry::new("0186", "BANDO-MEDIOLANUM", "BFIVESBBXXX"),
    BankEntry::new("0188", "BANCO-ALCALA", "ALCLESMMXXX"),
    BankEntry::new("0190", "BANCO-BPI", "BBPIESMMXXX"),
    BankEntry::new("0196", "PORTIGON-AG", "WELAESMMXXX"),
    BankEntry::new("0198", "BANCO-COOPERATIVO-ESPANOL", "BCOEESMMXXX"),
    BankEntry::new("0200", "PRIVAT-BANK-DEGROOF", "PRVBESB1XXX"),
    BankEntry::new("0211", "EBN-BANCO-NEGOCIOS", "PROAESMMXXX"),
    BankEntry::new("0216", "TARGOBANK", "POHIESMMXXX"),
    BankEntry::new("0218", "FCE-BANK-PLC", "FCEFESM1XXX"),
    BankEntry::new("0219", "BANQUE-MAROCAINE-COMMERCE", "BMCEESMMXXX"),
    BankEntry::new("0220", "BANCO-FINANTIA-CAPITAL", "FIOFESM1XXX"),
    BankEntry::new("0223", "GENERAL-ELECTRIC-BANK", "GEECESB1XXX"),
    BankEntry::new("0224", "SANTANDER-CONSUMER", "SCFBESMMXXX"),
    BankEntry::new("0225", "BANCO-CETELEM", "FIEIESM1XXX"),
    BankEntry::new("0226", "UBS-BANK", "UBSWESMMXXX"),
    BankEntry::new("0227", "UNOE-BANK", "UNOEESM1XXX"),
    BankEntry::new("0229", "BANCO-POPULAR-ESA", "POPLESMMXXX"),
    BankEntry::new("0231", "DEXIA-SABADELL", "DSBLESMMXXX"),
    BankEntry::new("0232", "BANCO-INVERSIS", "INVLESMMXXX"),
    BankEntry::new("0233", "POPULAR-BANCA-PRIVADA", "POPIESMMXXX"),
    BankEntry::new("0234", "BANCO-CAMINOS", "CCOCESMMXXX"),
    BankEntry::new("0235", "BANCO-PICHINCHA", "PIESESM1XXX"),
    BankEntry::new("0236", "SABADELL-SOLBANK", "LOYIESMMXXX"),
    BankEntry::new("0237", "CAJASUR-BANCO", "CSURES2CXXX"),
    BankEntry::new("0238", "BANCO-PASTOR", "POPUESMMXXX"),
    BankEntry::new("0239", "EVO-BANK", "EVOBESMMXXX"),
    BankEntry::new("0444", "SISTEMA-4B", ""),
    BankEntry::new("0487", "BANCO-MARE-NOSTRUM", "GBMNESMMXXX"),
    BankEntry::new("0488", "BANCO-FINANCIERO", "BFASESMMXXX"),
    BankEntry::new("1000", "ICO", "ICROESMMXXX"),
    BankEntry::new("1451", "CAISSE-REGIONALE-SUDMEDITERRANEE", "CRCGESB1XXX"),
    BankEntry::new("1457", "DELAGE-LANDEN-INTB", "LLISESM1XXX"),
    BankEntry::new("1459", "COPERATIVE-RAIFFEISEN", "PRABESMMXXX"),
    BankEntry::new("1460", "CREDIT-SUISSE-AG", "CRESESMMXXX"),
    BankEntry::new("1463", "BANQUE-PSA-FINANCE", "PSABESM1XXX"),
    BankEntry::new("1465", "ING-DIRECT", "INGDESMMXXX"),
    BankEntry::new("1467", "HYPOTHEKENBANK-FRNAKFURT", "EHYPESMXXXX"),
    BankEntry::new("1470", "BANCO-PORTUGUES-INVESTIMENTO", "BPIPESM1XXX"),
    BankEntry::new("1472", "CREDIT-AGRICOLE-FACTORING", "UCSSESM1XXX"),
    BankEntry::new("1473", "BANQUE-PREIVEE EDMOND", "PRIBESMXXXX"),
    BankEntry::new("1474", "CITIBANK-INTERNACIONAL", "CITIESMXXXX"),
    BankEntry::new("1475", "CORTAL-CONSORS", "CCSEESM1XXX"),
    BankEntry::new("1479", "NATIXIS", "NATXESMMXXX"),
    BankEntry::new("1480", "VOLKSWAGEN-BANK", "VOWAES21XXX"),
    BankEntry::new("1481", "BANCO-MAIS", "ESMMES64XXX"),
    BankEntry::new("1482", "JOHN-DEERE-BANK", "CHASESM3XXX"),
    BankEntry::new("1485", "BANK-OF-AMERICA", "BOFAES2XXXX"),
    BankEntry::new("1487", "TOYOTA-KREDITBANK", "TKGTFR21XXX"),
    BankEntry::new("1488", "PICTET-CIE", "PICTESMMXXX"),
    BankEntry::new("1490", "SELF-TRADE-BANK", "SELFESMMXXX"),
    BankEntry::new("1491", "TRIODOS-BANK", "TRIOESMMXXX"),
    BankEntry::new("1492", "BNP-PARIBAS-LEASE", "ESSIESMMXXX"),
    BankEntry::new("1493", "CAIXA-BANCO-INVESTIMENTO", "CXBIPTPLXXX"),
    BankEntry::new("1494", "INTESA-SANPAOLO", "BCITESMMXXX"),
    BankEntry::new("1496", "GENEFIM", "GENFFRP1XXX"),
    BankEntry::new("1499", "CLAAS-FINANCIAL", "CLAAFRP1XXX"),
    BankEntry::new("1500", "NATIXIS-LEASE", "NALEFRP1XXX"),
    BankEntry::new("1501", "DEUTSCHE-PFANDBRIEFBANK", "DPBBESM1XXX"),
    BankEntry::new("1502", "IKB-DEUTSCHE-INDUSTRIEBANK", "IKBDESM1XXX"),
    BankEntry::new("1504", "HONDA-BANK", "HONDDEF1XXX"),
    BankEntry::new("1505", "EUROPE-ARAB-BANK", "ARABESMMXXX"),
    BankEntry::new("1508", "RCI-BANQUE", "RCIDDE31XXX"),
    BankEntry::new("1509", "BANCO-PRIMUS", "PRUUPTP1XXX"),
    BankEntry::new("1510", "SAXO-BANK", "SAXODKKKXXX"),
    BankEntry::new("1513", "CAIXA-GERAL-DEPOSITOS", "CGDIES21XXX"),
    BankEntry::new("1522", "EFG-BANK", "EFGBESMMXXX"),
    BankEntry::new("1523", "MERCEDES-BENZ-BANK", "DEUTESBBXXX"),
    BankEntry::new("1524", "UBI-BANCA", "UBIBESMMXXX"),
    BankEntry::new("1525", "BANQUE-CHAABI-MAROC", "BCDMESMMXXX"),
    BankEntry::new("1528", "JCB-FINANCE", "ES1528"),
    BankEntry::new("1530", "SOFINLOC", "FIOFESM1XXX"),
    BankEntry::new("1531", "CREDIT-SUISSE", "CSROESM1XXX"),
    BankEntry::new("1532", "BNP-PARIBAS-FACTOR", "BNPAESMSXXX"),
    BankEntry::new("1535", "AKF-BANK", "AKFBDE33XXX"),
    BankEntry::new("1536", "OREY-FINANCIAL", "OVSCPTP1XXX"),
    BankEntry::new("1538", "INDUSTRIAL-COMMERCIAL-CHINA", "ICBKESMMXXX"),
    BankEntry::new("1544", "ANDBANK", "BACAESMMXXX"),
    BankEntry::new("1545", "CREDIT-ACRICOLE-LUXEMBURGO", "AGRIESMMXXX"),
    BankEntry::new("1546", "CNH-CAPITAL", "CNCUFRP1XXX"),
    BankEntry::new("1549", "MAINFIRST", "MAIFDFFXXX"),
    BankEntry::new("2000", "CECABANK", "CECAESMMXXX"),
    BankEntry::new("2013", "CATALUNYA-BANK", "CESCESBBXXX"),
    BankEntry::new("2038", "BANKIA", "CAHMESMMXXX"),
    BankEntry::new("2045", "CAIXA-DESTALVIS-ONTINENT", "CECAESMM045"),
    BankEntry::new("2048", "LEBERBANK", "CECAESMM048"),
    BankEntry::new("2056", "CAIXA-DESTALVIS-POLLENSA", "CECAESMM056"),
    BankEntry::new("2080", "NGC-BANCO", "CAGLESMMVIG"),
    BankEntry::new("2085", "IBERCAJA-BANCO", "CAZRES2ZXXX"),
    BankEntry::new("2086", "BANCO-GRUPO-CAJATRES", "CECAESMM086"),
    BankEntry::new("2095", "KUTXABANK", "BASKES2BXXX"),
    BankEntry::new("2096", "CAJA-ESPANA-NVERSIONES", "CSPAES2LXXX"),
    BankEntry::new("2100", "CAIXABANK", "CAIXESBBXXX"),
    BankEntry::new("2103", "UNICAJA-BANCO", "UCJAES2MXXX"),
    BankEntry::new("2104", "CAJA-SALAMANCA-SORIA", "CSSOES2SXXX"),
    BankEntry::new("2105", "BANCO-CASTILLA-MANCHA", "CECAESMM105"),
    BankEntry::new("2108", "BANCO-CAJAESPANA-SALAMANCASORIA", "CSPAES2L108"),
    BankEntry::new("2401", "CAJA-PENSIONES-BARCELONA", "CAIXESBBXXX"),
    BankEntry::new("2414", "CAJA-ASTURIAS", "CECAESMMO48"),
    BankEntry::new("2415", "CAJA-EXTREMADURA", "CECAESMM099"),
    BankEntry::new("2416", "CAJA-CANTABRIA", "CECAESMM066"),
    BankEntry::new("2420", "IBERCAJA", "CAZRES2ZXXX"),
    BankEntry::new("2421", "CAJA-GRANADA", "CECAESMM031"),
    BankEntry::new("2422", "CAJA-MURCIA", "CECAESMM043"),
    BankEntry::new("2424", "CAJA-BALEARES", "CECAESMM051"),
    BankEntry::new("2426", "CAJA-RONDA", "UCJAES2MXXX"),
    BankEntry::new("2427", "CAJA-INMACULADA", "CECAESMM427"),
    BankEntry::new("2428", "CAJA-CIRCULO-BUROS", "CECAESMM428"),
    BankEntry::new("2429", "CAJA-BADAJOZ", "CECAESMM429"),
    BankEntry::new("2430", "BILBAO-BIZKAIA-KUTXA", "BASKES2BXXX"),
    BankEntry::new("2431", "CAJA-GUIPUZOCA", "CGGKES22XXX"),
    BankEntry::new("2432", "CAJA-VITORIA-ALAVA", "CECAESMM097"),
    BankEntry::new("2433", "CECA", "CECAESMMXXX"),
    BankEntry::new("3001", "CAJA-RURAL-ALMENDRALEJO", "BCOEESMM001"),
    BankEntry::new("3005", "CAJA-RURAL-CENTRAL", "BCOEESMM005"),
    BankEntry::new("3007", "CAJA-RURAL-GIJON", "BCOEESMM007"),
    BankEntry::new("3008", "CAJA-RURAL-NAVARRA", "BCOEESMM008"),
    BankEntry::new("3009", "CAJA-RURAL-EXTREMADURA", "BCOEESMM009"),
    BankEntry::new("3016", "CAJA-RURAL-SALAMANCA", "BCOEESMM016"),
    BankEntry::new("3017", "CAJA-RURAL-SORIA", "BCOEESMM017"),
    BankEntry::new("3018", "CAJA-RURAL-SANAGUSTIN", "BCOEESMM018"),
    BankEntry::new("3020", "CAJA-RURAL-UTRERA", "BCOEESMM020"),
    BankEntry::new("3023", "CAJA-RURAL-GRANADA", "BCOEESMM023"),
    BankEntry::new("3025", "CAIXA-CREDIT-ENGINYERS", "CDENESBBXXX"),
    BankEntry::new("3029", "CAJA-CREDITO-PETREL", "BCOEESMM029"),
    BankEntry::new("3035", "CAJA-LABORAL-POPULAR", "CLPEES2MXXX"),
    BankEntry::new("3045", "CAIXA-RURAL-ALTEA", "BCOEESMM045"),
    BankEntry::new("3058", "CAJAS-RURALES-UNIDAS CAJAMAR", "CCRIES2AXXX"),
    BankEntry::new("3059", "CAJA-RURAL-ASTURIAS", "BCOEESMM059"),
    BankEntry::new("3060", "CAJA-RURAL-FUENTESEGOVIA", "BCOEESMM060"),
    BankEntry::new("3063", "CAJA-RURAL-CORDOBA", "BCOEESMM063"),
    BankEntry::new("3067", "CAJA-RURAL-JAEN", "BCOEESMM067"),
    BankEntry::new("3070", "CAIXA-RURAL-GALEGA", "BCOEESMM070"),
    BankEntry::new("3076", "CAJA-RURAL-CAJASIETE", "BCOEESMM076"),
    BankEntry::new("3080", "CAJA-RURAL-TERUEL", "BCOEESMM080"),
    BankEntry::new("3081", "CAJA-RURAL-CASTILLALAMANCHA", "BCOEESMM081"),
    BankEntry::new("3085", "CAJA-RURAL-ZAMORA", "BCOEESMM085"),
    BankEntry::new("3089", "CAJA-RURAL-BAENA", "BCOEESMM089"),
    BankEntry::new("3095", "CAJA-RURAL-SANROQUE", "BCOEESMM095"),
    BankEntry::new("3096", "CAIXA-RURAL-LALCUDIA", "BCOEESMM096"),
    BankEntry::new("3098", "CAJA-RURAL-NTRASEÑORAROSARIO", "BCOEESMM098"),
    BankEntry::new("3102", "CAIXA-SANTFERRER-DUIXO", "BCOEESMM102"),
    BankEntry::new("3104", "CAJA-RURAL-CANETETORRES", "BCOEESMM104"),
    BankEntry::new("3105", "CAIXA-RURAL-CALLOSA", "BCOEESMM105"),
    BankEntry::new("3110", "CAJA-RURAL-CATOLICOAGRARIA", "BCOESSMM110"),
    BankEntry::new("3111", "CAJA-RURAL-LAVALLSISIDRO", "BCOEESMM111"),
    BankEntry::new("3112", "CAJA-RURAL-SANJOSEBURRIANA", "BCOEESMM112"),
    BankEntry::new("3113", "CAJA-RURAL-SANJOSEALCORA", "BCOEESMM113"),
    BankEntry::new("3115", "CAJA-RURAL-MADRESOL", "BCOEESMM115"),
    BankEntry::new("3116", "CAJA-RURAL-MOTACUERVO", "BCOEESMM116"),
    BankEntry::new("3117", "CAIXA-RURAL-DALGEMESI", "BCOEESMM117"),
    BankEntry::new("3118", "CAIXA-RURAL-TORRENT", "BCOEESMM118"),
    BankEntry::new("3119", "CAJA-RURAL-SANJAIME", "BCOEESMM119"),
    BankEntry::new("3121", "CAJA-RURAL-CHESTE", "BCOEESMM121"),
    BankEntry::new("3123", "CAIXA-RURAL-TURIS", "BCOEESMM123"),
    BankEntry::new("3127", "CAJA-RURAL-CASASIBANEZ", "BCOEESMM127"),
    BankEntry::new("3130", "CAJA-RURAL-ALMASSORA", "BCOEESMM130"),
    BankEntry::new("3134", "CAJA-RURAL-SRAESPERANZA", "BCOEESMM134"),
    BankEntry::new("3135", "CAJA-RURAL-SANJOSENULES", "BCOEESMM135"),
    BankEntry::new("3138", "CAJA-RURAL-BETXI", "BCOEESMM138"),
    BankEntry::new("3140", "CAJA-RURAL-GUISSONA", "BCOEESMM140"),
    BankEntry::new("3144", "CAJA-RURAL-VILLAMALEA", "BCOEESMM144"),
    BankEntry::new("3146", "CAJA-CREDITO-COOPERATIVO", "CCCVESM1XXX"),
    BankEntry::new("3150", "CAJA-RURAL-ALBALCOOP", "BCOEESMM150"),
    BankEntry::new("3152", "CAJA-RURAL-VILLAR", "BCOEESMM152"),
    BankEntry::new("3157", "CAJA-RURAL-JUNQUERA", "BCOEESMM157"),
    BankEntry::new("3159", "CAIXA-POPULAR-SDADCOOP", "BCOEESMM159"),
    BankEntry::new("3160", "CAIXA-RURAL-SANTJOSEPCOOP", "BCOEESMM160"),
    BankEntry::new("3162", "CAJA-RURAL-BENICARLO", "BCOEESMM162"),
    BankEntry::new("3165", "CAJA-RURAL-SANISIDROVILAFAMES", "BCOEESMM165"),
    BankEntry::new("3166", "CAIXA-RURAL-LESCOVESVINROMAS", "BCOEESMM166"),
    BankEntry::new("3174", "CAIXA-RURAL-VINAROS", "BCOEESMM174"),
    BankEntry::new("3179", "CAJA-RURAL-ALGINET", "BCOEESMM179"),
    BankEntry::new("3183", "CAJA-ARQUITECTOS-COOP", "CASDESBBXXX"),
    BankEntry::new("3186", "CAIXA-RURAL-ALBALAT", "BCOEESMM186"),
    BankEntry::new("3187", "CAJA-RURAL-DELSUR", "BCOEESMM187"),
    BankEntry::new("3190", "CAJA-RURAL-ALBACETE", "BCOEESMM190"),
    BankEntry::new("3191", "CAJA-RURAL-ARAGON", "BCOEESMM191"),
    BankEntry::new("9000", "BANCO-DE-ESPANA", "ESPBESMMXXX"),
];
