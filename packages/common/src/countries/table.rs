/// `(alpha-3, alpha-2, common name, languages)` for every ISO-3166 country
/// plus user-assigned codes that appear on world maps.
pub(super) const COUNTRIES: &[(&str, &str, &str, &[&str])] = &[
    ("AFG", "AF", "Afghanistan", &["Dari", "Pashto", "Turkmen"]),
    ("ALA", "AX", "Åland Islands", &["Swedish"]),
    ("ALB", "AL", "Albania", &["Albanian"]),
    ("DZA", "DZ", "Algeria", &["Arabic", "Berber"]),
    ("ASM", "AS", "American Samoa", &["English", "Samoan"]),
    ("AND", "AD", "Andorra", &["Catalan"]),
    ("AGO", "AO", "Angola", &["Portuguese"]),
    ("AIA", "AI", "Anguilla", &["English"]),
    ("ATA", "AQ", "Antarctica", &[]),
    ("ATG", "AG", "Antigua and Barbuda", &["English"]),
    ("ARG", "AR", "Argentina", &["Spanish", "Guaraní"]),
    ("ARM", "AM", "Armenia", &["Armenian"]),
    ("ABW", "AW", "Aruba", &["Dutch", "Papiamento"]),
    ("AUS", "AU", "Australia", &["English"]),
    ("AUT", "AT", "Austria", &["German"]),
    ("AZE", "AZ", "Azerbaijan", &["Azerbaijani"]),
    ("BHS", "BS", "Bahamas", &["English"]),
    ("BHR", "BH", "Bahrain", &["Arabic"]),
    ("BGD", "BD", "Bangladesh", &["Bengali"]),
    ("BRB", "BB", "Barbados", &["English"]),
    ("BLR", "BY", "Belarus", &["Belarusian", "Russian"]),
    ("BEL", "BE", "Belgium", &["Dutch", "French", "German"]),
    ("BLZ", "BZ", "Belize", &["Belizean Creole", "English", "Spanish"]),
    ("BEN", "BJ", "Benin", &["French"]),
    ("BMU", "BM", "Bermuda", &["English"]),
    ("BTN", "BT", "Bhutan", &["Dzongkha"]),
    ("BOL", "BO", "Bolivia", &["Aymara", "Guaraní", "Quechua", "Spanish"]),
    ("BES", "BQ", "Caribbean Netherlands", &["English", "Dutch", "Papiamento"]),
    ("BIH", "BA", "Bosnia and Herzegovina", &["Bosnian", "Croatian", "Serbian"]),
    ("BWA", "BW", "Botswana", &["English", "Tswana"]),
    ("BVT", "BV", "Bouvet Island", &["Norwegian"]),
    ("BRA", "BR", "Brazil", &["Portuguese"]),
    ("IOT", "IO", "British Indian Ocean Territory", &["English"]),
    ("VGB", "VG", "British Virgin Islands", &["English"]),
    ("BRN", "BN", "Brunei", &["Malay"]),
    ("BGR", "BG", "Bulgaria", &["Bulgarian"]),
    ("BFA", "BF", "Burkina Faso", &["French"]),
    ("BDI", "BI", "Burundi", &["French", "Kirundi"]),
    ("KHM", "KH", "Cambodia", &["Khmer"]),
    ("CMR", "CM", "Cameroon", &["English", "French"]),
    ("CAN", "CA", "Canada", &["English", "French"]),
    ("CPV", "CV", "Cape Verde", &["Portuguese"]),
    ("CYM", "KY", "Cayman Islands", &["English"]),
    ("CAF", "CF", "Central African Republic", &["French", "Sango"]),
    ("TCD", "TD", "Chad", &["Arabic", "French"]),
    ("CHL", "CL", "Chile", &["Spanish"]),
    ("CHN", "CN", "China", &["Chinese"]),
    ("CXR", "CX", "Christmas Island", &["English"]),
    ("CCK", "CC", "Cocos (Keeling) Islands", &["English"]),
    ("COL", "CO", "Colombia", &["Spanish"]),
    ("COM", "KM", "Comoros", &["Arabic", "French", "Comorian"]),
    ("COK", "CK", "Cook Islands", &["English", "Cook Islands Māori"]),
    ("CRI", "CR", "Costa Rica", &["Spanish"]),
    ("HRV", "HR", "Croatia", &["Croatian"]),
    ("CUB", "CU", "Cuba", &["Spanish"]),
    ("CUW", "CW", "Curaçao", &["English", "Dutch", "Papiamento"]),
    ("CYP", "CY", "Cyprus", &["Greek", "Turkish"]),
    ("CZE", "CZ", "Czechia", &["Czech", "Slovak"]),
    ("COD", "CD", "DR Congo", &["French", "Kikongo", "Lingala", "Swahili", "Tshiluba"]),
    ("DNK", "DK", "Denmark", &["Danish"]),
    ("DJI", "DJ", "Djibouti", &["Arabic", "French"]),
    ("DMA", "DM", "Dominica", &["English"]),
    ("DOM", "DO", "Dominican Republic", &["Spanish"]),
    ("ECU", "EC", "Ecuador", &["Spanish"]),
    ("EGY", "EG", "Egypt", &["Arabic"]),
    ("SLV", "SV", "El Salvador", &["Spanish"]),
    ("GNQ", "GQ", "Equatorial Guinea", &["French", "Portuguese", "Spanish"]),
    ("ERI", "ER", "Eritrea", &["Arabic", "English", "Tigrinya"]),
    ("EST", "EE", "Estonia", &["Estonian"]),
    ("SWZ", "SZ", "Eswatini", &["English", "Swazi"]),
    ("ETH", "ET", "Ethiopia", &["Amharic"]),
    ("FLK", "FK", "Falkland Islands", &["English"]),
    ("FRO", "FO", "Faroe Islands", &["Danish", "Faroese"]),
    ("FJI", "FJ", "Fiji", &["English", "Fijian", "Fiji Hindi"]),
    ("FIN", "FI", "Finland", &["Finnish", "Swedish"]),
    ("FRA", "FR", "France", &["French"]),
    ("GUF", "GF", "French Guiana", &["French"]),
    ("PYF", "PF", "French Polynesia", &["French"]),
    ("ATF", "TF", "French Southern and Antarctic Lands", &["French"]),
    ("GAB", "GA", "Gabon", &["French"]),
    ("GMB", "GM", "Gambia", &["English"]),
    ("GEO", "GE", "Georgia", &["Georgian"]),
    ("DEU", "DE", "Germany", &["German"]),
    ("GHA", "GH", "Ghana", &["English"]),
    ("GIB", "GI", "Gibraltar", &["English"]),
    ("GRC", "GR", "Greece", &["Greek"]),
    ("GRL", "GL", "Greenland", &["Greenlandic"]),
    ("GRD", "GD", "Grenada", &["English"]),
    ("GLP", "GP", "Guadeloupe", &["French"]),
    ("GUM", "GU", "Guam", &["Chamorro", "English", "Spanish"]),
    ("GTM", "GT", "Guatemala", &["Spanish"]),
    ("GGY", "GG", "Guernsey", &["English", "French", "Guernésiais"]),
    ("GIN", "GN", "Guinea", &["French"]),
    ("GNB", "GW", "Guinea-Bissau", &["Portuguese", "Upper Guinea Creole"]),
    ("GUY", "GY", "Guyana", &["English"]),
    ("HTI", "HT", "Haiti", &["French", "Haitian Creole"]),
    ("HMD", "HM", "Heard Island and McDonald Islands", &["English"]),
    ("HND", "HN", "Honduras", &["Spanish"]),
    ("HKG", "HK", "Hong Kong", &["English", "Chinese"]),
    ("HUN", "HU", "Hungary", &["Hungarian"]),
    ("ISL", "IS", "Iceland", &["Icelandic"]),
    ("IND", "IN", "India", &["English", "Hindi", "Tamil"]),
    ("IDN", "ID", "Indonesia", &["Indonesian"]),
    ("IRN", "IR", "Iran", &["Persian"]),
    ("IRQ", "IQ", "Iraq", &["Arabic", "Aramaic", "Sorani"]),
    ("IRL", "IE", "Ireland", &["English", "Irish"]),
    ("IMN", "IM", "Isle of Man", &["English", "Manx"]),
    ("ISR", "IL", "Israel", &["Arabic", "Hebrew"]),
    ("ITA", "IT", "Italy", &["Italian"]),
    ("CIV", "CI", "Ivory Coast", &["French"]),
    ("JAM", "JM", "Jamaica", &["English", "Jamaican Patois"]),
    ("JPN", "JP", "Japan", &["Japanese"]),
    ("JEY", "JE", "Jersey", &["English", "French", "Jèrriais"]),
    ("JOR", "JO", "Jordan", &["Arabic"]),
    ("KAZ", "KZ", "Kazakhstan", &["Kazakh", "Russian"]),
    ("KEN", "KE", "Kenya", &["English", "Swahili"]),
    ("KIR", "KI", "Kiribati", &["English", "Gilbertese"]),
    ("XKX", "XK", "Kosovo", &["Albanian", "Serbian"]),
    ("KWT", "KW", "Kuwait", &["Arabic"]),
    ("KGZ", "KG", "Kyrgyzstan", &["Kyrgyz", "Russian"]),
    ("LAO", "LA", "Laos", &["Lao"]),
    ("LVA", "LV", "Latvia", &["Latvian"]),
    ("LBN", "LB", "Lebanon", &["Arabic", "French"]),
    ("LSO", "LS", "Lesotho", &["English", "Sotho"]),
    ("LBR", "LR", "Liberia", &["English"]),
    ("LBY", "LY", "Libya", &["Arabic"]),
    ("LIE", "LI", "Liechtenstein", &["German"]),
    ("LTU", "LT", "Lithuania", &["Lithuanian"]),
    ("LUX", "LU", "Luxembourg", &["German", "French", "Luxembourgish"]),
    ("MAC", "MO", "Macau", &["Portuguese", "Chinese"]),
    ("MDG", "MG", "Madagascar", &["French", "Malagasy"]),
    ("MWI", "MW", "Malawi", &["English", "Chewa"]),
    ("MYS", "MY", "Malaysia", &["English", "Malay"]),
    ("MDV", "MV", "Maldives", &["Maldivian"]),
    ("MLI", "ML", "Mali", &["French"]),
    ("MLT", "MT", "Malta", &["English", "Maltese"]),
    ("MHL", "MH", "Marshall Islands", &["English", "Marshallese"]),
    ("MTQ", "MQ", "Martinique", &["French"]),
    ("MRT", "MR", "Mauritania", &["Arabic"]),
    ("MUS", "MU", "Mauritius", &["English", "French", "Mauritian Creole"]),
    ("MYT", "YT", "Mayotte", &["French"]),
    ("MEX", "MX", "Mexico", &["Spanish"]),
    ("FSM", "FM", "Micronesia", &["English"]),
    ("MDA", "MD", "Moldova", &["Romanian"]),
    ("MCO", "MC", "Monaco", &["French"]),
    ("MNG", "MN", "Mongolia", &["Mongolian"]),
    ("MNE", "ME", "Montenegro", &["Montenegrin"]),
    ("MSR", "MS", "Montserrat", &["English"]),
    ("MAR", "MA", "Morocco", &["Arabic", "Berber"]),
    ("MOZ", "MZ", "Mozambique", &["Portuguese"]),
    ("MMR", "MM", "Myanmar", &["Burmese"]),
    ("NAM", "NA", "Namibia", &["Afrikaans", "German", "English"]),
    ("NRU", "NR", "Nauru", &["English", "Nauru"]),
    ("NPL", "NP", "Nepal", &["Nepali"]),
    ("NLD", "NL", "Netherlands", &["Dutch"]),
    ("NCL", "NC", "New Caledonia", &["French"]),
    ("NZL", "NZ", "New Zealand", &["English", "Māori", "New Zealand Sign Language"]),
    ("NIC", "NI", "Nicaragua", &["Spanish"]),
    ("NER", "NE", "Niger", &["French"]),
    ("NGA", "NG", "Nigeria", &["English"]),
    ("NIU", "NU", "Niue", &["English", "Niuean"]),
    ("NFK", "NF", "Norfolk Island", &["English", "Norfuk"]),
    ("PRK", "KP", "North Korea", &["Korean"]),
    ("MKD", "MK", "North Macedonia", &["Macedonian"]),
    ("MNP", "MP", "Northern Mariana Islands", &["Carolinian", "Chamorro", "English"]),
    ("NOR", "NO", "Norway", &["Norwegian Nynorsk", "Norwegian Bokmål", "Sami"]),
    ("OMN", "OM", "Oman", &["Arabic"]),
    ("PAK", "PK", "Pakistan", &["English", "Urdu"]),
    ("PLW", "PW", "Palau", &["English", "Palauan"]),
    ("PSE", "PS", "Palestine", &["Arabic", "Hebrew"]),
    ("PAN", "PA", "Panama", &["Spanish"]),
    ("PNG", "PG", "Papua New Guinea", &["English", "Hiri Motu", "Tok Pisin"]),
    ("PRY", "PY", "Paraguay", &["Guaraní", "Spanish"]),
    ("PER", "PE", "Peru", &["Aymara", "Quechua", "Spanish"]),
    ("PHL", "PH", "Philippines", &["English", "Filipino"]),
    ("PCN", "PN", "Pitcairn Islands", &["English"]),
    ("POL", "PL", "Poland", &["Polish"]),
    ("PRT", "PT", "Portugal", &["Portuguese"]),
    ("PRI", "PR", "Puerto Rico", &["English", "Spanish"]),
    ("QAT", "QA", "Qatar", &["Arabic"]),
    ("COG", "CG", "Republic of the Congo", &["French", "Kikongo", "Lingala"]),
    ("REU", "RE", "Réunion", &["French"]),
    ("ROU", "RO", "Romania", &["Romanian"]),
    ("RUS", "RU", "Russia", &["Russian"]),
    ("RWA", "RW", "Rwanda", &["English", "French", "Kinyarwanda"]),
    ("BLM", "BL", "Saint Barthélemy", &["French"]),
    ("SHN", "SH", "Saint Helena, Ascension and Tristan da Cunha", &["English"]),
    ("KNA", "KN", "Saint Kitts and Nevis", &["English"]),
    ("LCA", "LC", "Saint Lucia", &["English"]),
    ("MAF", "MF", "Saint Martin", &["French"]),
    ("SPM", "PM", "Saint Pierre and Miquelon", &["French"]),
    ("VCT", "VC", "Saint Vincent and the Grenadines", &["English"]),
    ("WSM", "WS", "Samoa", &["English", "Samoan"]),
    ("SMR", "SM", "San Marino", &["Italian"]),
    ("STP", "ST", "São Tomé and Príncipe", &["Portuguese"]),
    ("SAU", "SA", "Saudi Arabia", &["Arabic"]),
    ("SEN", "SN", "Senegal", &["French"]),
    ("SRB", "RS", "Serbia", &["Serbian"]),
    ("SYC", "SC", "Seychelles", &["Seychellois Creole", "English", "French"]),
    ("SLE", "SL", "Sierra Leone", &["English"]),
    ("SGP", "SG", "Singapore", &["English", "Chinese", "Malay", "Tamil"]),
    ("SXM", "SX", "Sint Maarten", &["English", "French", "Dutch"]),
    ("SVK", "SK", "Slovakia", &["Slovak"]),
    ("SVN", "SI", "Slovenia", &["Slovene"]),
    ("SLB", "SB", "Solomon Islands", &["English"]),
    ("SOM", "SO", "Somalia", &["Arabic", "Somali"]),
    ("ZAF", "ZA", "South Africa", &["Afrikaans", "English", "Zulu", "Xhosa"]),
    ("SGS", "GS", "South Georgia", &["English"]),
    ("KOR", "KR", "South Korea", &["Korean"]),
    ("SSD", "SS", "South Sudan", &["English"]),
    ("ESP", "ES", "Spain", &["Spanish"]),
    ("LKA", "LK", "Sri Lanka", &["Sinhala", "Tamil"]),
    ("SDN", "SD", "Sudan", &["Arabic", "English"]),
    ("SUR", "SR", "Suriname", &["Dutch"]),
    ("SJM", "SJ", "Svalbard and Jan Mayen", &["Norwegian"]),
    ("SWE", "SE", "Sweden", &["Swedish"]),
    ("CHE", "CH", "Switzerland", &["French", "Swiss German", "Italian", "Romansh"]),
    ("SYR", "SY", "Syria", &["Arabic"]),
    ("TWN", "TW", "Taiwan", &["Chinese"]),
    ("TJK", "TJ", "Tajikistan", &["Russian", "Tajik"]),
    ("TZA", "TZ", "Tanzania", &["English", "Swahili"]),
    ("THA", "TH", "Thailand", &["Thai"]),
    ("TLS", "TL", "Timor-Leste", &["Portuguese", "Tetum"]),
    ("TGO", "TG", "Togo", &["French"]),
    ("TKL", "TK", "Tokelau", &["English", "Samoan", "Tokelauan"]),
    ("TON", "TO", "Tonga", &["English", "Tongan"]),
    ("TTO", "TT", "Trinidad and Tobago", &["English"]),
    ("TUN", "TN", "Tunisia", &["Arabic"]),
    ("TUR", "TR", "Turkey", &["Turkish"]),
    ("TKM", "TM", "Turkmenistan", &["Russian", "Turkmen"]),
    ("TCA", "TC", "Turks and Caicos Islands", &["English"]),
    ("TUV", "TV", "Tuvalu", &["English", "Tuvaluan"]),
    ("UGA", "UG", "Uganda", &["English", "Swahili"]),
    ("UKR", "UA", "Ukraine", &["Ukrainian"]),
    ("ARE", "AE", "United Arab Emirates", &["Arabic"]),
    ("GBR", "GB", "United Kingdom", &["English"]),
    ("USA", "US", "United States", &["English"]),
    ("UMI", "UM", "United States Minor Outlying Islands", &["English"]),
    ("VIR", "VI", "United States Virgin Islands", &["English"]),
    ("URY", "UY", "Uruguay", &["Spanish"]),
    ("UZB", "UZ", "Uzbekistan", &["Russian", "Uzbek"]),
    ("VUT", "VU", "Vanuatu", &["Bislama", "English", "French"]),
    ("VAT", "VA", "Vatican City", &["Italian", "Latin"]),
    ("VEN", "VE", "Venezuela", &["Spanish"]),
    ("VNM", "VN", "Vietnam", &["Vietnamese"]),
    ("WLF", "WF", "Wallis and Futuna", &["French"]),
    ("ESH", "EH", "Western Sahara", &["Berber", "Hassaniya", "Spanish"]),
    ("YEM", "YE", "Yemen", &["Arabic"]),
    ("ZMB", "ZM", "Zambia", &["English"]),
    ("ZWE", "ZW", "Zimbabwe", &["English", "Shona", "Ndebele"]),
];
