//! Built-in object table seeded into every registry.
//!
//! Rows without an OID (pure cipher-mode names) or without any name are kept
//! so NIDs stay dense; registering such a row is a no-op.

/// Well-known NIDs referenced by name elsewhere.
pub mod nid {
    pub const UNDEF: u32 = 0;
    pub const RSA_ENCRYPTION: u32 = 6;
    pub const COMMON_NAME: u32 = 13;
    pub const COUNTRY_NAME: u32 = 14;
    pub const ORGANIZATION_NAME: u32 = 17;
    pub const PKCS7_DATA: u32 = 21;
    pub const PKCS7_SIGNED: u32 = 22;
    pub const PKCS7_ENVELOPED: u32 = 23;
    pub const PKCS7_SIGNED_AND_ENVELOPED: u32 = 24;
    pub const PKCS7_DIGEST: u32 = 25;
    pub const PKCS7_ENCRYPTED: u32 = 26;
    pub const EMAIL_ADDRESS: u32 = 48;
    pub const SHA1_WITH_RSA_ENCRYPTION: u32 = 65;
    pub const NETSCAPE_CERT_TYPE: u32 = 71;
    pub const SUBJECT_KEY_IDENTIFIER: u32 = 82;
    pub const KEY_USAGE: u32 = 83;
    pub const SUBJECT_ALT_NAME: u32 = 85;
    pub const BASIC_CONSTRAINTS: u32 = 87;
    pub const AUTHORITY_KEY_IDENTIFIER: u32 = 90;
    pub const EXT_KEY_USAGE: u32 = 125;
    pub const AES_256_CBC: u32 = 184;
}

/// One row of the object table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectInfo {
    pub nid: u32,
    pub short_name: Option<&'static str>,
    pub long_name: Option<&'static str>,
    pub oid: Option<&'static str>,
}

impl ObjectInfo {
    pub const fn new(
        nid: u32,
        short_name: Option<&'static str>,
        long_name: Option<&'static str>,
        oid: Option<&'static str>,
    ) -> Self {
        Self {
            nid,
            short_name,
            long_name,
            oid,
        }
    }
}

#[rustfmt::skip]
pub static BUILTIN_OBJECTS: &[ObjectInfo] = &[
    ObjectInfo::new(nid::UNDEF, None, None, Some("1.2.840.113549.1.12.1")),
    ObjectInfo::new(1, None, Some("rsadsi"), Some("1.2.840.113549")),
    ObjectInfo::new(2, None, Some("pkcs"), Some("1.2.840.113549.1")),
    ObjectInfo::new(3, Some("MD2"), Some("md2"), Some("1.2.840.113549.2.2")),
    ObjectInfo::new(4, Some("MD5"), Some("md5"), Some("1.2.840.113549.2.5")),
    ObjectInfo::new(5, Some("RC4"), Some("rc4"), Some("1.2.840.113549.3.4")),
    ObjectInfo::new(6, None, Some("rsaEncryption"), Some("1.2.840.113549.1.1.1")),
    ObjectInfo::new(7, Some("RSA-MD2"), Some("md2WithRSAEncryption"), Some("1.2.840.113549.1.1.2")),
    ObjectInfo::new(8, Some("RSA-MD5"), Some("md5WithRSAEncryption"), Some("1.2.840.113549.1.1.4")),
    ObjectInfo::new(9, Some("PBE-MD2-DES"), Some("pbeWithMD2AndDES-CBC"), Some("1.2.840.113549.1.5.1")),
    ObjectInfo::new(10, Some("PBE-MD5-DES"), Some("pbeWithMD5AndDES-CBC"), Some("1.2.840.113549.1.5.3")),
    ObjectInfo::new(11, None, Some("X500"), Some("2.5")),
    ObjectInfo::new(12, None, Some("X509"), Some("2.5.4")),
    ObjectInfo::new(13, Some("CN"), Some("commonName"), Some("2.5.4.3")),
    ObjectInfo::new(14, Some("C"), Some("countryName"), Some("2.5.4.6")),
    ObjectInfo::new(15, Some("L"), Some("localityName"), Some("2.5.4.7")),
    ObjectInfo::new(16, Some("ST"), Some("stateOrProvinceName"), Some("2.5.4.8")),
    ObjectInfo::new(17, Some("O"), Some("organizationName"), Some("2.5.4.10")),
    ObjectInfo::new(18, Some("OU"), Some("organizationalUnitName"), Some("2.5.4.11")),
    ObjectInfo::new(19, Some("RSA"), Some("rsa"), Some("2.5.8.1.1")),
    ObjectInfo::new(20, None, Some("pkcs7"), Some("1.2.840.113549.1.7")),
    ObjectInfo::new(nid::PKCS7_DATA, None, Some("pkcs7-data"), Some("1.2.840.113549.1.7.1")),
    ObjectInfo::new(nid::PKCS7_SIGNED, None, Some("pkcs7-signedData"), Some("1.2.840.113549.1.7.2")),
    ObjectInfo::new(nid::PKCS7_ENVELOPED, None, Some("pkcs7-envelopedData"), Some("1.2.840.113549.1.7.3")),
    ObjectInfo::new(nid::PKCS7_SIGNED_AND_ENVELOPED, None, Some("pkcs7-signedAndEnvelopedData"), Some("1.2.840.113549.1.7.4")),
    ObjectInfo::new(nid::PKCS7_DIGEST, None, Some("pkcs7-digestData"), Some("1.2.840.113549.1.7.5")),
    ObjectInfo::new(nid::PKCS7_ENCRYPTED, None, Some("pkcs7-encryptedData"), Some("1.2.840.113549.1.7.6")),
    ObjectInfo::new(27, None, Some("pkcs3"), Some("1.2.840.113549.1.3")),
    ObjectInfo::new(28, None, Some("dhKeyAgreement"), Some("1.2.840.113549.1.3.1")),
    ObjectInfo::new(29, Some("DES-ECB"), Some("des-ecb"), Some("1.3.14.3.2.6")),
    ObjectInfo::new(30, Some("DES-CFB"), Some("des-cfb"), Some("1.3.14.3.2.9")),
    ObjectInfo::new(31, Some("DES-CBC"), Some("des-cbc"), Some("1.3.14.3.2.7")),
    ObjectInfo::new(32, Some("DES-EDE"), Some("des-ede"), Some("1.3.14.3.2.17")),
    ObjectInfo::new(33, Some("DES-EDE3"), Some("des-ede3"), None),
    ObjectInfo::new(34, Some("IDEA-CBC"), Some("idea-cbc"), Some("1.3.6.1.4.1.188.7.1.1.2")),
    ObjectInfo::new(35, Some("IDEA-CFB"), Some("idea-cfb"), None),
    ObjectInfo::new(36, Some("IDEA-ECB"), Some("idea-ecb"), None),
    ObjectInfo::new(37, Some("RC2-CBC"), Some("rc2-cbc"), Some("1.2.840.113549.3.2")),
    ObjectInfo::new(38, Some("RC2-ECB"), Some("rc2-ecb"), None),
    ObjectInfo::new(39, Some("RC2-CFB"), Some("rc2-cfb"), None),
    ObjectInfo::new(40, Some("RC2-OFB"), Some("rc2-ofb"), None),
    ObjectInfo::new(41, Some("SHA"), Some("sha"), Some("1.3.14.3.2.18")),
    ObjectInfo::new(42, Some("RSA-SHA"), Some("shaWithRSAEncryption"), Some("1.3.14.3.2.15")),
    ObjectInfo::new(43, Some("DES-EDE-CBC"), Some("des-ede-cbc"), None),
    ObjectInfo::new(44, Some("DES-EDE3-CBC"), Some("des-ede3-cbc"), Some("1.2.840.113549.3.7")),
    ObjectInfo::new(45, Some("DES-OFB"), Some("des-ofb"), Some("1.3.14.3.2.8")),
    ObjectInfo::new(46, Some("IDEA-OFB"), Some("idea-ofb"), None),
    ObjectInfo::new(47, None, Some("pkcs9"), Some("1.2.840.113549.1.9")),
    ObjectInfo::new(48, Some("Email"), Some("emailAddress"), Some("1.2.840.113549.1.9.1")),
    ObjectInfo::new(49, None, Some("unstructuredName"), Some("1.2.840.113549.1.9.2")),
    ObjectInfo::new(50, None, Some("contentType"), Some("1.2.840.113549.1.9.3")),
    ObjectInfo::new(51, None, Some("messageDigest"), Some("1.2.840.113549.1.9.4")),
    ObjectInfo::new(52, None, Some("signingTime"), Some("1.2.840.113549.1.9.5")),
    ObjectInfo::new(53, None, Some("countersignature"), Some("1.2.840.113549.1.9.6")),
    ObjectInfo::new(54, None, Some("challengePassword"), Some("1.2.840.113549.1.9.7")),
    ObjectInfo::new(55, None, Some("unstructuredAddress"), Some("1.2.840.113549.1.9.8")),
    ObjectInfo::new(56, None, Some("extendedCertificateAttributes"), Some("1.2.840.113549.1.9.9")),
    ObjectInfo::new(57, Some("Netscape"), Some("Netscape Communications Corp."), Some("2.16.840.1.113730")),
    ObjectInfo::new(58, Some("nsCertExt"), Some("Netscape Certificate Extension"), Some("2.16.840.1.113730.1")),
    ObjectInfo::new(59, Some("nsDataType"), Some("Netscape Data Type"), Some("2.16.840.1.113730.2")),
    ObjectInfo::new(60, Some("DES-EDE-CFB"), Some("des-ede-cfb"), None),
    ObjectInfo::new(61, Some("DES-EDE3-CFB"), Some("des-ede3-cfb"), None),
    ObjectInfo::new(62, Some("DES-EDE-OFB"), Some("des-ede-ofb"), None),
    ObjectInfo::new(63, Some("DES-EDE3-OFB"), Some("des-ede3-ofb"), None),
    ObjectInfo::new(64, Some("SHA1"), Some("sha1"), Some("1.3.14.3.2.26")),
    ObjectInfo::new(65, Some("RSA-SHA1"), Some("sha1WithRSAEncryption"), Some("1.2.840.113549.1.1.5")),
    ObjectInfo::new(66, Some("DSA-SHA"), Some("dsaWithSHA"), Some("1.3.14.3.2.13")),
    ObjectInfo::new(67, Some("DSA-old"), Some("dsaEncryption-old"), Some("1.3.14.3.2.12")),
    ObjectInfo::new(68, Some("PBE-SHA1-RC2-64"), Some("pbeWithSHA1AndRC2-CBC"), Some("1.2.840.113549.1.5.11")),
    ObjectInfo::new(69, None, Some("PBKDF2"), Some("1.2.840.113549.1.5.12")),
    ObjectInfo::new(70, Some("DSA-SHA1-old"), Some("dsaWithSHA1-old"), Some("1.3.14.3.2.27")),
    ObjectInfo::new(71, Some("nsCertType"), Some("Netscape Cert Type"), Some("2.16.840.1.113730.1.1")),
    ObjectInfo::new(72, Some("nsBaseUrl"), Some("Netscape Base Url"), Some("2.16.840.1.113730.1.2")),
    ObjectInfo::new(73, Some("nsRevocationUrl"), Some("Netscape Revocation Url"), Some("2.16.840.1.113730.1.3")),
    ObjectInfo::new(74, Some("nsCaRevocationUrl"), Some("Netscape CA Revocation Url"), Some("2.16.840.1.113730.1.4")),
    ObjectInfo::new(75, Some("nsRenewalUrl"), Some("Netscape Renewal Url"), Some("2.16.840.1.113730.1.7")),
    ObjectInfo::new(76, Some("nsCaPolicyUrl"), Some("Netscape CA Policy Url"), Some("2.16.840.1.113730.1.8")),
    ObjectInfo::new(77, Some("nsSslServerName"), Some("Netscape SSL Server Name"), Some("2.16.840.1.113730.1.12")),
    ObjectInfo::new(78, Some("nsComment"), Some("Netscape Comment"), Some("2.16.840.1.113730.1.13")),
    ObjectInfo::new(79, Some("nsCertSequence"), Some("Netscape Certificate Sequence"), Some("2.16.840.1.113730.2.5")),
    ObjectInfo::new(80, Some("DESX-CBC"), Some("desx-cbc"), None),
    ObjectInfo::new(81, Some("id-ce"), None, Some("2.5.29")),
    ObjectInfo::new(82, Some("subjectKeyIdentifier"), Some("X509v3 Subject Key Identifier"), Some("2.5.29.14")),
    ObjectInfo::new(83, Some("keyUsage"), Some("X509v3 Key Usage"), Some("2.5.29.15")),
    ObjectInfo::new(84, Some("privateKeyUsagePeriod"), Some("X509v3 Private Key Usage Period"), Some("2.5.29.16")),
    ObjectInfo::new(85, Some("subjectAltName"), Some("X509v3 Subject Alternative Name"), Some("2.5.29.17")),
    ObjectInfo::new(86, Some("issuerAltName"), Some("X509v3 Issuer Alternative Name"), Some("2.5.29.18")),
    ObjectInfo::new(87, Some("basicConstraints"), Some("X509v3 Basic Constraints"), Some("2.5.29.19")),
    ObjectInfo::new(88, Some("crlNumber"), Some("X509v3 CRL Number"), Some("2.5.29.20")),
    ObjectInfo::new(89, Some("certificatePolicies"), Some("X509v3 Certificate Policies"), Some("2.5.29.32")),
    ObjectInfo::new(90, Some("authorityKeyIdentifier"), Some("X509v3 Authority Key Identifier"), Some("2.5.29.35")),
    ObjectInfo::new(91, Some("BF-CBC"), Some("bf-cbc"), Some("1.3.6.1.4.1.3029.1.2")),
    ObjectInfo::new(92, Some("BF-ECB"), Some("bf-ecb"), None),
    ObjectInfo::new(93, Some("BF-CFB"), Some("bf-cfb"), None),
    ObjectInfo::new(94, Some("BF-OFB"), Some("bf-ofb"), None),
    ObjectInfo::new(95, Some("MDC2"), Some("mdc2"), Some("2.5.8.3.101")),
    ObjectInfo::new(96, Some("RSA-MDC2"), Some("mdc2withRSA"), Some("2.5.8.3.100")),
    ObjectInfo::new(97, Some("RC4-40"), Some("rc4-40"), None),
    ObjectInfo::new(98, Some("RC2-40-CBC"), Some("rc2-40-cbc"), None),
    ObjectInfo::new(99, Some("G"), Some("givenName"), Some("2.5.4.42")),
    ObjectInfo::new(100, Some("S"), Some("surname"), Some("2.5.4.4")),
    ObjectInfo::new(101, Some("I"), Some("initials"), Some("2.5.4.43")),
    ObjectInfo::new(102, Some("UID"), Some("uniqueIdentifier"), Some("2.5.4.45")),
    ObjectInfo::new(103, Some("crlDistributionPoints"), Some("X509v3 CRL Distribution Points"), Some("2.5.29.31")),
    ObjectInfo::new(104, Some("RSA-NP-MD5"), Some("md5WithRSA"), Some("1.3.14.3.2.3")),
    ObjectInfo::new(105, Some("SN"), Some("serialNumber"), Some("2.5.4.5")),
    ObjectInfo::new(106, Some("T"), Some("title"), Some("2.5.4.12")),
    ObjectInfo::new(107, Some("D"), Some("description"), Some("2.5.4.13")),
    ObjectInfo::new(108, Some("CAST5-CBC"), Some("cast5-cbc"), Some("1.2.840.113533.7.66.10")),
    ObjectInfo::new(109, Some("CAST5-ECB"), Some("cast5-ecb"), None),
    ObjectInfo::new(110, Some("CAST5-CFB"), Some("cast5-cfb"), None),
    ObjectInfo::new(111, Some("CAST5-OFB"), Some("cast5-ofb"), None),
    ObjectInfo::new(112, None, Some("pbeWithMD5AndCast5CBC"), Some("1.2.840.113533.7.66.12")),
    ObjectInfo::new(113, Some("DSA-SHA1"), Some("dsaWithSHA1"), Some("1.2.840.10040.4.3")),
    ObjectInfo::new(114, Some("MD5-SHA1"), Some("md5-sha1"), None),
    ObjectInfo::new(115, Some("RSA-SHA1-2"), Some("sha1WithRSA"), Some("1.3.14.3.2.29")),
    ObjectInfo::new(116, Some("DSA"), Some("dsaEncryption"), Some("1.2.840.10040.4.1")),
    ObjectInfo::new(117, Some("RIPEMD160"), Some("ripemd160"), Some("1.3.36.3.2.1")),
    ObjectInfo::new(118, Some("RSA-RIPEMD160"), Some("ripemd160WithRSA"), Some("1.3.36.3.3.1.2")),
    ObjectInfo::new(119, Some("RC5-CBC"), Some("rc5-cbc"), Some("1.2.840.113549.3.8")),
    ObjectInfo::new(120, Some("RC5-ECB"), Some("rc5-ecb"), None),
    ObjectInfo::new(121, Some("RC5-CFB"), Some("rc5-cfb"), None),
    ObjectInfo::new(122, Some("RC5-OFB"), Some("rc5-ofb"), None),
    ObjectInfo::new(123, Some("RLE"), Some("run length compression"), Some("1.1.1.1.666.1")),
    ObjectInfo::new(124, Some("ZLIB"), Some("zlib compression"), Some("1.1.1.1.666.2")),
    ObjectInfo::new(125, Some("extendedKeyUsage"), Some("X509v3 Extended Key Usage"), Some("2.5.29.37")),
    ObjectInfo::new(126, Some("PKIX"), None, Some("1.3.6.1.5.5.7")),
    ObjectInfo::new(127, Some("id-kp"), None, Some("1.3.6.1.5.5.7.3")),
    ObjectInfo::new(128, Some("serverAuth"), Some("TLS Web Server Authentication"), Some("1.3.6.1.5.5.7.3.1")),
    ObjectInfo::new(129, Some("clientAuth"), Some("TLS Web Client Authentication"), Some("1.3.6.1.5.5.7.3.2")),
    ObjectInfo::new(130, Some("codeSigning"), Some("Code Signing"), Some("1.3.6.1.5.5.7.3.3")),
    ObjectInfo::new(131, Some("emailProtection"), Some("E-mail Protection"), Some("1.3.6.1.5.5.7.3.4")),
    ObjectInfo::new(132, Some("timeStamping"), Some("Time Stamping"), Some("1.3.6.1.5.5.7.3.8")),
    ObjectInfo::new(133, Some("msCodeInd"), Some("Microsoft Individual Code Signing"), Some("1.3.6.1.4.1.311.2.1.21")),
    ObjectInfo::new(134, Some("msCodeCom"), Some("Microsoft Commercial Code Signing"), Some("1.3.6.1.4.1.311.2.1.22")),
    ObjectInfo::new(135, Some("msCTLSign"), Some("Microsoft Trust List Signing"), Some("1.3.6.1.4.1.311.10.3.1")),
    ObjectInfo::new(136, Some("msSGC"), Some("Microsoft Server Gated Crypto"), Some("1.3.6.1.4.1.311.10.3.3")),
    ObjectInfo::new(137, Some("msEFS"), Some("Microsoft Encrypted File System"), Some("1.3.6.1.4.1.311.10.3.4")),
    ObjectInfo::new(138, Some("nsSGC"), Some("Netscape Server Gated Crypto"), Some("2.16.840.1.113730.4.1")),
    ObjectInfo::new(139, Some("deltaCRL"), Some("X509v3 Delta CRL Indicator"), Some("2.5.29.27")),
    ObjectInfo::new(140, Some("CRLReason"), Some("CRL Reason Code"), Some("2.5.29.21")),
    ObjectInfo::new(141, Some("invalidityDate"), Some("Invalidity Date"), Some("2.5.29.24")),
    ObjectInfo::new(142, Some("SXNetID"), Some("Strong Extranet ID"), Some("1.3.101.1.4.1")),
    ObjectInfo::new(143, Some("PBE-SHA1-RC4-128"), Some("pbeWithSHA1And128BitRC4"), Some("1.2.840.113549.1.12.1.1")),
    ObjectInfo::new(144, Some("PBE-SHA1-RC4-40"), Some("pbeWithSHA1And40BitRC4"), Some("1.2.840.113549.1.12.1.2")),
    ObjectInfo::new(145, Some("PBE-SHA1-3DES"), Some("pbeWithSHA1And3-KeyTripleDES-CBC"), Some("1.2.840.113549.1.12.1.3")),
    ObjectInfo::new(146, Some("PBE-SHA1-2DES"), Some("pbeWithSHA1And2-KeyTripleDES-CBC"), Some("1.2.840.113549.1.12.1.4")),
    ObjectInfo::new(147, Some("PBE-SHA1-RC2-128"), Some("pbeWithSHA1And128BitRC2-CBC"), Some("1.2.840.113549.1.12.1.5")),
    ObjectInfo::new(148, Some("PBE-SHA1-RC2-40"), Some("pbeWithSHA1And40BitRC2-CBC"), Some("1.2.840.113549.1.12.1.6")),
    ObjectInfo::new(149, None, Some("keyBag"), Some("1.2.840.113549.1.12.10.1.1")),
    ObjectInfo::new(150, None, Some("pkcs8ShroudedKeyBag"), Some("1.2.840.113549.1.12.10.1.2")),
    ObjectInfo::new(151, None, Some("certBag"), Some("1.2.840.113549.1.12.10.1.3")),
    ObjectInfo::new(152, None, Some("crlBag"), Some("1.2.840.113549.1.12.10.1.4")),
    ObjectInfo::new(153, None, Some("secretBag"), Some("1.2.840.113549.1.12.10.1.5")),
    ObjectInfo::new(154, None, Some("safeContentsBag"), Some("1.2.840.113549.1.12.10.1.6")),
    ObjectInfo::new(155, None, Some("PBES2"), Some("1.2.840.113549.1.5.13")),
    ObjectInfo::new(156, None, Some("PBMAC1"), Some("1.2.840.113549.1.5.14")),
    ObjectInfo::new(157, None, Some("hmacWithSHA1"), Some("1.2.840.113549.2.7")),
    ObjectInfo::new(158, Some("id-qt-cps"), Some("Policy Qualifier CPS"), Some("1.3.6.1.5.5.7.2.1")),
    ObjectInfo::new(159, Some("id-qt-unotice"), Some("Policy Qualifier User Notice"), Some("1.3.6.1.5.5.7.2.2")),
    ObjectInfo::new(160, Some("RC2-64-CBC"), Some("rc2-64-cbc"), None),
    ObjectInfo::new(161, Some("SMIME-CAPS"), Some("S/MIME Capabilities"), Some("1.2.840.113549.1.9.15")),
    ObjectInfo::new(162, Some("PBE-MD2-RC2-64"), Some("pbeWithMD2AndRC2-CBC"), Some("1.2.840.113549.1.5.4")),
    ObjectInfo::new(163, Some("PBE-MD5-RC2-64"), Some("pbeWithMD5AndRC2-CBC"), Some("1.2.840.113549.1.5.6")),
    ObjectInfo::new(164, Some("PBE-SHA1-DES"), Some("pbeWithSHA1AndDES-CBC"), Some("1.2.840.113549.1.5.10")),
    ObjectInfo::new(165, Some("msExtReq"), Some("Microsoft Extension Request"), Some("1.3.6.1.4.1.311.2.1.14")),
    ObjectInfo::new(166, Some("extReq"), Some("Extension Request"), Some("1.2.840.113549.1.9.14")),
    ObjectInfo::new(167, Some("name"), Some("name"), Some("2.5.4.41")),
    ObjectInfo::new(168, Some("dnQualifier"), Some("dnQualifier"), Some("2.5.4.46")),
    ObjectInfo::new(169, Some("id-pe"), None, Some("1.3.6.1.5.5.7.1")),
    ObjectInfo::new(170, Some("id-ad"), None, Some("1.3.6.1.5.5.7.48")),
    ObjectInfo::new(171, Some("authorityInfoAccess"), Some("Authority Information Access"), Some("1.3.6.1.5.5.7.1.1")),
    ObjectInfo::new(172, Some("OCSP"), Some("OCSP"), Some("1.3.6.1.5.5.7.48.1")),
    ObjectInfo::new(173, Some("caIssuers"), Some("CA Issuers"), Some("1.3.6.1.5.5.7.48.2")),
    ObjectInfo::new(174, Some("OCSPSigning"), Some("OCSP Signing"), Some("1.3.6.1.5.5.7.3.9")),
    ObjectInfo::new(175, Some("AES-128-EBC"), Some("aes-128-ebc"), Some("2.16.840.1.101.3.4.1.1")),
    ObjectInfo::new(176, Some("AES-128-CBC"), Some("aes-128-cbc"), Some("2.16.840.1.101.3.4.1.2")),
    ObjectInfo::new(177, Some("AES-128-OFB"), Some("aes-128-ofb"), Some("2.16.840.1.101.3.4.1.3")),
    ObjectInfo::new(178, Some("AES-128-CFB"), Some("aes-128-cfb"), Some("2.16.840.1.101.3.4.1.4")),
    ObjectInfo::new(179, Some("AES-192-EBC"), Some("aes-192-ebc"), Some("2.16.840.1.101.3.4.1.21")),
    ObjectInfo::new(180, Some("AES-192-CBC"), Some("aes-192-cbc"), Some("2.16.840.1.101.3.4.1.22")),
    ObjectInfo::new(181, Some("AES-192-OFB"), Some("aes-192-ofb"), Some("2.16.840.1.101.3.4.1.23")),
    ObjectInfo::new(182, Some("AES-192-CFB"), Some("aes-192-cfb"), Some("2.16.840.1.101.3.4.1.24")),
    ObjectInfo::new(183, Some("AES-256-EBC"), Some("aes-256-ebc"), Some("2.16.840.1.101.3.4.1.41")),
    ObjectInfo::new(184, Some("AES-256-CBC"), Some("aes-256-cbc"), Some("2.16.840.1.101.3.4.1.42")),
    ObjectInfo::new(185, Some("AES-256-OFB"), Some("aes-256-ofb"), Some("2.16.840.1.101.3.4.1.43")),
    ObjectInfo::new(186, Some("AES-256-CFB"), Some("aes-256-cfb"), Some("2.16.840.1.101.3.4.1.44")),
];
