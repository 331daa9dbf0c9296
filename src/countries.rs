/// `(zone id, ISO 3166 alpha-2 code)`, from tzdata `zone.tab` plus the
/// legacy names in `backward` that still denote a single country.
const ZONE_COUNTRIES: &[(&str, &str)] = &[
    ("Africa/Abidjan", "CI"),
    ("Africa/Accra", "GH"),
    ("Africa/Addis_Ababa", "ET"),
    ("Africa/Algiers", "DZ"),
    ("Africa/Asmara", "ER"),
    ("Africa/Asmera", "ER"),
    ("Africa/Bamako", "ML"),
    ("Africa/Bangui", "CF"),
    ("Africa/Banjul", "GM"),
    ("Africa/Bissau", "GW"),
    ("Africa/Blantyre", "MW"),
    ("Africa/Brazzaville", "CG"),
    ("Africa/Bujumbura", "BI"),
    ("Africa/Cairo", "EG"),
    ("Africa/Casablanca", "MA"),
    ("Africa/Ceuta", "ES"),
    ("Africa/Conakry", "GN"),
    ("Africa/Dakar", "SN"),
    ("Africa/Dar_es_Salaam", "TZ"),
    ("Africa/Djibouti", "DJ"),
    ("Africa/Douala", "CM"),
    ("Africa/El_Aaiun", "EH"),
    ("Africa/Freetown", "SL"),
    ("Africa/Gaborone", "BW"),
    ("Africa/Harare", "ZW"),
    ("Africa/Johannesburg", "ZA"),
    ("Africa/Juba", "SS"),
    ("Africa/Kampala", "UG"),
    ("Africa/Khartoum", "SD"),
    ("Africa/Kigali", "RW"),
    ("Africa/Kinshasa", "CD"),
    ("Africa/Lagos", "NG"),
    ("Africa/Libreville", "GA"),
    ("Africa/Lome", "TG"),
    ("Africa/Luanda", "AO"),
    ("Africa/Lubumbashi", "CD"),
    ("Africa/Lusaka", "ZM"),
    ("Africa/Malabo", "GQ"),
    ("Africa/Maputo", "MZ"),
    ("Africa/Maseru", "LS"),
    ("Africa/Mbabane", "SZ"),
    ("Africa/Mogadishu", "SO"),
    ("Africa/Monrovia", "LR"),
    ("Africa/Nairobi", "KE"),
    ("Africa/Ndjamena", "TD"),
    ("Africa/Niamey", "NE"),
    ("Africa/Nouakchott", "MR"),
    ("Africa/Ouagadougou", "BF"),
    ("Africa/Porto-Novo", "BJ"),
    ("Africa/Sao_Tome", "ST"),
    ("Africa/Timbuktu", "ML"),
    ("Africa/Tripoli", "LY"),
    ("Africa/Tunis", "TN"),
    ("Africa/Windhoek", "NA"),
    ("America/Adak", "US"),
    ("America/Anchorage", "US"),
    ("America/Anguilla", "AI"),
    ("America/Antigua", "AG"),
    ("America/Araguaina", "BR"),
    ("America/Argentina/Buenos_Aires", "AR"),
    ("America/Argentina/Catamarca", "AR"),
    ("America/Argentina/ComodRivadavia", "AR"),
    ("America/Argentina/Cordoba", "AR"),
    ("America/Argentina/Jujuy", "AR"),
    ("America/Argentina/La_Rioja", "AR"),
    ("America/Argentina/Mendoza", "AR"),
    ("America/Argentina/Rio_Gallegos", "AR"),
    ("America/Argentina/Salta", "AR"),
    ("America/Argentina/San_Juan", "AR"),
    ("America/Argentina/San_Luis", "AR"),
    ("America/Argentina/Tucuman", "AR"),
    ("America/Argentina/Ushuaia", "AR"),
    ("America/Aruba", "AW"),
    ("America/Asuncion", "PY"),
    ("America/Atikokan", "CA"),
    ("America/Atka", "US"),
    ("America/Bahia", "BR"),
    ("America/Bahia_Banderas", "MX"),
    ("America/Barbados", "BB"),
    ("America/Belem", "BR"),
    ("America/Belize", "BZ"),
    ("America/Blanc-Sablon", "CA"),
    ("America/Boa_Vista", "BR"),
    ("America/Bogota", "CO"),
    ("America/Boise", "US"),
    ("America/Buenos_Aires", "AR"),
    ("America/Cambridge_Bay", "CA"),
    ("America/Campo_Grande", "BR"),
    ("America/Cancun", "MX"),
    ("America/Caracas", "VE"),
    ("America/Catamarca", "AR"),
    ("America/Cayenne", "GF"),
    ("America/Cayman", "KY"),
    ("America/Chicago", "US"),
    ("America/Chihuahua", "MX"),
    ("America/Ciudad_Juarez", "MX"),
    ("America/Coral_Harbour", "CA"),
    ("America/Cordoba", "AR"),
    ("America/Costa_Rica", "CR"),
    ("America/Creston", "CA"),
    ("America/Cuiaba", "BR"),
    ("America/Curacao", "CW"),
    ("America/Danmarkshavn", "GL"),
    ("America/Dawson", "CA"),
    ("America/Dawson_Creek", "CA"),
    ("America/Denver", "US"),
    ("America/Detroit", "US"),
    ("America/Dominica", "DM"),
    ("America/Edmonton", "CA"),
    ("America/Eirunepe", "BR"),
    ("America/El_Salvador", "SV"),
    ("America/Ensenada", "MX"),
    ("America/Fort_Nelson", "CA"),
    ("America/Fort_Wayne", "US"),
    ("America/Fortaleza", "BR"),
    ("America/Glace_Bay", "CA"),
    ("America/Godthab", "GL"),
    ("America/Goose_Bay", "CA"),
    ("America/Grand_Turk", "TC"),
    ("America/Grenada", "GD"),
    ("America/Guadeloupe", "GP"),
    ("America/Guatemala", "GT"),
    ("America/Guayaquil", "EC"),
    ("America/Guyana", "GY"),
    ("America/Halifax", "CA"),
    ("America/Havana", "CU"),
    ("America/Hermosillo", "MX"),
    ("America/Indiana/Indianapolis", "US"),
    ("America/Indiana/Knox", "US"),
    ("America/Indiana/Marengo", "US"),
    ("America/Indiana/Petersburg", "US"),
    ("America/Indiana/Tell_City", "US"),
    ("America/Indiana/Vevay", "US"),
    ("America/Indiana/Vincennes", "US"),
    ("America/Indiana/Winamac", "US"),
    ("America/Indianapolis", "US"),
    ("America/Inuvik", "CA"),
    ("America/Iqaluit", "CA"),
    ("America/Jamaica", "JM"),
    ("America/Jujuy", "AR"),
    ("America/Juneau", "US"),
    ("America/Kentucky/Louisville", "US"),
    ("America/Kentucky/Monticello", "US"),
    ("America/Knox_IN", "US"),
    ("America/Kralendijk", "BQ"),
    ("America/La_Paz", "BO"),
    ("America/Lima", "PE"),
    ("America/Los_Angeles", "US"),
    ("America/Louisville", "US"),
    ("America/Lower_Princes", "SX"),
    ("America/Maceio", "BR"),
    ("America/Managua", "NI"),
    ("America/Manaus", "BR"),
    ("America/Marigot", "MF"),
    ("America/Martinique", "MQ"),
    ("America/Matamoros", "MX"),
    ("America/Mazatlan", "MX"),
    ("America/Mendoza", "AR"),
    ("America/Menominee", "US"),
    ("America/Merida", "MX"),
    ("America/Metlakatla", "US"),
    ("America/Mexico_City", "MX"),
    ("America/Miquelon", "PM"),
    ("America/Moncton", "CA"),
    ("America/Monterrey", "MX"),
    ("America/Montevideo", "UY"),
    ("America/Montreal", "CA"),
    ("America/Montserrat", "MS"),
    ("America/Nassau", "BS"),
    ("America/New_York", "US"),
    ("America/Nipigon", "CA"),
    ("America/Nome", "US"),
    ("America/Noronha", "BR"),
    ("America/North_Dakota/Beulah", "US"),
    ("America/North_Dakota/Center", "US"),
    ("America/North_Dakota/New_Salem", "US"),
    ("America/Nuuk", "GL"),
    ("America/Ojinaga", "MX"),
    ("America/Panama", "PA"),
    ("America/Pangnirtung", "CA"),
    ("America/Paramaribo", "SR"),
    ("America/Phoenix", "US"),
    ("America/Port-au-Prince", "HT"),
    ("America/Port_of_Spain", "TT"),
    ("America/Porto_Acre", "BR"),
    ("America/Porto_Velho", "BR"),
    ("America/Puerto_Rico", "PR"),
    ("America/Punta_Arenas", "CL"),
    ("America/Rainy_River", "CA"),
    ("America/Rankin_Inlet", "CA"),
    ("America/Recife", "BR"),
    ("America/Regina", "CA"),
    ("America/Resolute", "CA"),
    ("America/Rio_Branco", "BR"),
    ("America/Rosario", "AR"),
    ("America/Santa_Isabel", "MX"),
    ("America/Santarem", "BR"),
    ("America/Santiago", "CL"),
    ("America/Santo_Domingo", "DO"),
    ("America/Sao_Paulo", "BR"),
    ("America/Scoresbysund", "GL"),
    ("America/Shiprock", "US"),
    ("America/Sitka", "US"),
    ("America/St_Barthelemy", "BL"),
    ("America/St_Johns", "CA"),
    ("America/St_Kitts", "KN"),
    ("America/St_Lucia", "LC"),
    ("America/St_Thomas", "VI"),
    ("America/St_Vincent", "VC"),
    ("America/Swift_Current", "CA"),
    ("America/Tegucigalpa", "HN"),
    ("America/Thule", "GL"),
    ("America/Thunder_Bay", "CA"),
    ("America/Tijuana", "MX"),
    ("America/Toronto", "CA"),
    ("America/Tortola", "VG"),
    ("America/Vancouver", "CA"),
    ("America/Virgin", "VI"),
    ("America/Whitehorse", "CA"),
    ("America/Winnipeg", "CA"),
    ("America/Yakutat", "US"),
    ("America/Yellowknife", "CA"),
    ("Antarctica/Casey", "AQ"),
    ("Antarctica/Davis", "AQ"),
    ("Antarctica/DumontDUrville", "AQ"),
    ("Antarctica/Macquarie", "AU"),
    ("Antarctica/Mawson", "AQ"),
    ("Antarctica/McMurdo", "AQ"),
    ("Antarctica/Palmer", "AQ"),
    ("Antarctica/Rothera", "AQ"),
    ("Antarctica/South_Pole", "AQ"),
    ("Antarctica/Syowa", "AQ"),
    ("Antarctica/Troll", "AQ"),
    ("Antarctica/Vostok", "AQ"),
    ("Arctic/Longyearbyen", "SJ"),
    ("Asia/Aden", "YE"),
    ("Asia/Almaty", "KZ"),
    ("Asia/Amman", "JO"),
    ("Asia/Anadyr", "RU"),
    ("Asia/Aqtau", "KZ"),
    ("Asia/Aqtobe", "KZ"),
    ("Asia/Ashgabat", "TM"),
    ("Asia/Ashkhabad", "TM"),
    ("Asia/Atyrau", "KZ"),
    ("Asia/Baghdad", "IQ"),
    ("Asia/Bahrain", "BH"),
    ("Asia/Baku", "AZ"),
    ("Asia/Bangkok", "TH"),
    ("Asia/Barnaul", "RU"),
    ("Asia/Beirut", "LB"),
    ("Asia/Bishkek", "KG"),
    ("Asia/Brunei", "BN"),
    ("Asia/Calcutta", "IN"),
    ("Asia/Chita", "RU"),
    ("Asia/Choibalsan", "MN"),
    ("Asia/Chongqing", "CN"),
    ("Asia/Chungking", "CN"),
    ("Asia/Colombo", "LK"),
    ("Asia/Dacca", "BD"),
    ("Asia/Damascus", "SY"),
    ("Asia/Dhaka", "BD"),
    ("Asia/Dili", "TL"),
    ("Asia/Dubai", "AE"),
    ("Asia/Dushanbe", "TJ"),
    ("Asia/Famagusta", "CY"),
    ("Asia/Gaza", "PS"),
    ("Asia/Hanoi", "VN"),
    ("Asia/Harbin", "CN"),
    ("Asia/Hebron", "PS"),
    ("Asia/Ho_Chi_Minh", "VN"),
    ("Asia/Hong_Kong", "HK"),
    ("Asia/Hovd", "MN"),
    ("Asia/Irkutsk", "RU"),
    ("Asia/Istanbul", "TR"),
    ("Asia/Jakarta", "ID"),
    ("Asia/Jayapura", "ID"),
    ("Asia/Jerusalem", "IL"),
    ("Asia/Kabul", "AF"),
    ("Asia/Kamchatka", "RU"),
    ("Asia/Karachi", "PK"),
    ("Asia/Kashgar", "CN"),
    ("Asia/Kathmandu", "NP"),
    ("Asia/Katmandu", "NP"),
    ("Asia/Khandyga", "RU"),
    ("Asia/Kolkata", "IN"),
    ("Asia/Krasnoyarsk", "RU"),
    ("Asia/Kuala_Lumpur", "MY"),
    ("Asia/Kuching", "MY"),
    ("Asia/Kuwait", "KW"),
    ("Asia/Macao", "MO"),
    ("Asia/Macau", "MO"),
    ("Asia/Magadan", "RU"),
    ("Asia/Makassar", "ID"),
    ("Asia/Manila", "PH"),
    ("Asia/Muscat", "OM"),
    ("Asia/Nicosia", "CY"),
    ("Asia/Novokuznetsk", "RU"),
    ("Asia/Novosibirsk", "RU"),
    ("Asia/Omsk", "RU"),
    ("Asia/Oral", "KZ"),
    ("Asia/Phnom_Penh", "KH"),
    ("Asia/Pontianak", "ID"),
    ("Asia/Pyongyang", "KP"),
    ("Asia/Qatar", "QA"),
    ("Asia/Qostanay", "KZ"),
    ("Asia/Qyzylorda", "KZ"),
    ("Asia/Rangoon", "MM"),
    ("Asia/Riyadh", "SA"),
    ("Asia/Saigon", "VN"),
    ("Asia/Sakhalin", "RU"),
    ("Asia/Samarkand", "UZ"),
    ("Asia/Seoul", "KR"),
    ("Asia/Shanghai", "CN"),
    ("Asia/Singapore", "SG"),
    ("Asia/Srednekolymsk", "RU"),
    ("Asia/Taipei", "TW"),
    ("Asia/Tashkent", "UZ"),
    ("Asia/Tbilisi", "GE"),
    ("Asia/Tehran", "IR"),
    ("Asia/Tel_Aviv", "IL"),
    ("Asia/Thimbu", "BT"),
    ("Asia/Thimphu", "BT"),
    ("Asia/Tokyo", "JP"),
    ("Asia/Tomsk", "RU"),
    ("Asia/Ujung_Pandang", "ID"),
    ("Asia/Ulaanbaatar", "MN"),
    ("Asia/Ulan_Bator", "MN"),
    ("Asia/Urumqi", "CN"),
    ("Asia/Ust-Nera", "RU"),
    ("Asia/Vientiane", "LA"),
    ("Asia/Vladivostok", "RU"),
    ("Asia/Yakutsk", "RU"),
    ("Asia/Yangon", "MM"),
    ("Asia/Yekaterinburg", "RU"),
    ("Asia/Yerevan", "AM"),
    ("Atlantic/Azores", "PT"),
    ("Atlantic/Bermuda", "BM"),
    ("Atlantic/Canary", "ES"),
    ("Atlantic/Cape_Verde", "CV"),
    ("Atlantic/Faeroe", "FO"),
    ("Atlantic/Faroe", "FO"),
    ("Atlantic/Jan_Mayen", "SJ"),
    ("Atlantic/Madeira", "PT"),
    ("Atlantic/Reykjavik", "IS"),
    ("Atlantic/South_Georgia", "GS"),
    ("Atlantic/St_Helena", "SH"),
    ("Atlantic/Stanley", "FK"),
    ("Australia/ACT", "AU"),
    ("Australia/Adelaide", "AU"),
    ("Australia/Brisbane", "AU"),
    ("Australia/Broken_Hill", "AU"),
    ("Australia/Canberra", "AU"),
    ("Australia/Currie", "AU"),
    ("Australia/Darwin", "AU"),
    ("Australia/Eucla", "AU"),
    ("Australia/Hobart", "AU"),
    ("Australia/LHI", "AU"),
    ("Australia/Lindeman", "AU"),
    ("Australia/Lord_Howe", "AU"),
    ("Australia/Melbourne", "AU"),
    ("Australia/NSW", "AU"),
    ("Australia/North", "AU"),
    ("Australia/Perth", "AU"),
    ("Australia/Queensland", "AU"),
    ("Australia/South", "AU"),
    ("Australia/Sydney", "AU"),
    ("Australia/Tasmania", "AU"),
    ("Australia/Victoria", "AU"),
    ("Australia/West", "AU"),
    ("Australia/Yancowinna", "AU"),
    ("Brazil/Acre", "BR"),
    ("Brazil/DeNoronha", "BR"),
    ("Brazil/East", "BR"),
    ("Brazil/West", "BR"),
    ("Canada/Atlantic", "CA"),
    ("Canada/Central", "CA"),
    ("Canada/Eastern", "CA"),
    ("Canada/Mountain", "CA"),
    ("Canada/Newfoundland", "CA"),
    ("Canada/Pacific", "CA"),
    ("Canada/Saskatchewan", "CA"),
    ("Canada/Yukon", "CA"),
    ("Chile/Continental", "CL"),
    ("Chile/EasterIsland", "CL"),
    ("Cuba", "CU"),
    ("Egypt", "EG"),
    ("Eire", "IE"),
    ("Europe/Amsterdam", "NL"),
    ("Europe/Andorra", "AD"),
    ("Europe/Astrakhan", "RU"),
    ("Europe/Athens", "GR"),
    ("Europe/Belfast", "GB"),
    ("Europe/Belgrade", "RS"),
    ("Europe/Berlin", "DE"),
    ("Europe/Bratislava", "SK"),
    ("Europe/Brussels", "BE"),
    ("Europe/Bucharest", "RO"),
    ("Europe/Budapest", "HU"),
    ("Europe/Busingen", "DE"),
    ("Europe/Chisinau", "MD"),
    ("Europe/Copenhagen", "DK"),
    ("Europe/Dublin", "IE"),
    ("Europe/Gibraltar", "GI"),
    ("Europe/Guernsey", "GG"),
    ("Europe/Helsinki", "FI"),
    ("Europe/Isle_of_Man", "IM"),
    ("Europe/Istanbul", "TR"),
    ("Europe/Jersey", "JE"),
    ("Europe/Kaliningrad", "RU"),
    ("Europe/Kiev", "UA"),
    ("Europe/Kirov", "RU"),
    ("Europe/Kyiv", "UA"),
    ("Europe/Lisbon", "PT"),
    ("Europe/Ljubljana", "SI"),
    ("Europe/London", "GB"),
    ("Europe/Luxembourg", "LU"),
    ("Europe/Madrid", "ES"),
    ("Europe/Malta", "MT"),
    ("Europe/Mariehamn", "AX"),
    ("Europe/Minsk", "BY"),
    ("Europe/Monaco", "MC"),
    ("Europe/Moscow", "RU"),
    ("Europe/Nicosia", "CY"),
    ("Europe/Oslo", "NO"),
    ("Europe/Paris", "FR"),
    ("Europe/Podgorica", "ME"),
    ("Europe/Prague", "CZ"),
    ("Europe/Riga", "LV"),
    ("Europe/Rome", "IT"),
    ("Europe/Samara", "RU"),
    ("Europe/San_Marino", "SM"),
    ("Europe/Sarajevo", "BA"),
    ("Europe/Saratov", "RU"),
    ("Europe/Simferopol", "UA"),
    ("Europe/Skopje", "MK"),
    ("Europe/Sofia", "BG"),
    ("Europe/Stockholm", "SE"),
    ("Europe/Tallinn", "EE"),
    ("Europe/Tirane", "AL"),
    ("Europe/Tiraspol", "MD"),
    ("Europe/Ulyanovsk", "RU"),
    ("Europe/Uzhgorod", "UA"),
    ("Europe/Vaduz", "LI"),
    ("Europe/Vatican", "VA"),
    ("Europe/Vienna", "AT"),
    ("Europe/Vilnius", "LT"),
    ("Europe/Volgograd", "RU"),
    ("Europe/Warsaw", "PL"),
    ("Europe/Zagreb", "HR"),
    ("Europe/Zaporozhye", "UA"),
    ("Europe/Zurich", "CH"),
    ("GB", "GB"),
    ("GB-Eire", "GB"),
    ("Hongkong", "HK"),
    ("Iceland", "IS"),
    ("Indian/Antananarivo", "MG"),
    ("Indian/Chagos", "IO"),
    ("Indian/Christmas", "CX"),
    ("Indian/Cocos", "CC"),
    ("Indian/Comoro", "KM"),
    ("Indian/Kerguelen", "TF"),
    ("Indian/Mahe", "SC"),
    ("Indian/Maldives", "MV"),
    ("Indian/Mauritius", "MU"),
    ("Indian/Mayotte", "YT"),
    ("Indian/Reunion", "RE"),
    ("Iran", "IR"),
    ("Israel", "IL"),
    ("Jamaica", "JM"),
    ("Japan", "JP"),
    ("Kwajalein", "MH"),
    ("Libya", "LY"),
    ("Mexico/BajaNorte", "MX"),
    ("Mexico/BajaSur", "MX"),
    ("Mexico/General", "MX"),
    ("NZ", "NZ"),
    ("NZ-CHAT", "NZ"),
    ("Navajo", "US"),
    ("PRC", "CN"),
    ("Pacific/Apia", "WS"),
    ("Pacific/Auckland", "NZ"),
    ("Pacific/Bougainville", "PG"),
    ("Pacific/Chatham", "NZ"),
    ("Pacific/Chuuk", "FM"),
    ("Pacific/Easter", "CL"),
    ("Pacific/Efate", "VU"),
    ("Pacific/Enderbury", "KI"),
    ("Pacific/Fakaofo", "TK"),
    ("Pacific/Fiji", "FJ"),
    ("Pacific/Funafuti", "TV"),
    ("Pacific/Galapagos", "EC"),
    ("Pacific/Gambier", "PF"),
    ("Pacific/Guadalcanal", "SB"),
    ("Pacific/Guam", "GU"),
    ("Pacific/Honolulu", "US"),
    ("Pacific/Johnston", "UM"),
    ("Pacific/Kanton", "KI"),
    ("Pacific/Kiritimati", "KI"),
    ("Pacific/Kosrae", "FM"),
    ("Pacific/Kwajalein", "MH"),
    ("Pacific/Majuro", "MH"),
    ("Pacific/Marquesas", "PF"),
    ("Pacific/Midway", "UM"),
    ("Pacific/Nauru", "NR"),
    ("Pacific/Niue", "NU"),
    ("Pacific/Norfolk", "NF"),
    ("Pacific/Noumea", "NC"),
    ("Pacific/Pago_Pago", "AS"),
    ("Pacific/Palau", "PW"),
    ("Pacific/Pitcairn", "PN"),
    ("Pacific/Pohnpei", "FM"),
    ("Pacific/Ponape", "FM"),
    ("Pacific/Port_Moresby", "PG"),
    ("Pacific/Rarotonga", "CK"),
    ("Pacific/Saipan", "MP"),
    ("Pacific/Samoa", "AS"),
    ("Pacific/Tahiti", "PF"),
    ("Pacific/Tarawa", "KI"),
    ("Pacific/Tongatapu", "TO"),
    ("Pacific/Truk", "FM"),
    ("Pacific/Wake", "UM"),
    ("Pacific/Wallis", "WF"),
    ("Pacific/Yap", "FM"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("ROC", "TW"),
    ("ROK", "KR"),
    ("Singapore", "SG"),
    ("Turkey", "TR"),
    ("US/Alaska", "US"),
    ("US/Aleutian", "US"),
    ("US/Arizona", "US"),
    ("US/Central", "US"),
    ("US/East-Indiana", "US"),
    ("US/Eastern", "US"),
    ("US/Hawaii", "US"),
    ("US/Indiana-Starke", "US"),
    ("US/Michigan", "US"),
    ("US/Mountain", "US"),
    ("US/Pacific", "US"),
    ("US/Samoa", "AS"),
    ("W-SU", "RU"),
];

/// `(ISO 3166 alpha-2 code, country name)`
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("AE", "United Arab Emirates"),
    ("AF", "Afghanistan"),
    ("AG", "Antigua and Barbuda"),
    ("AI", "Anguilla"),
    ("AL", "Albania"),
    ("AM", "Armenia"),
    ("AO", "Angola"),
    ("AQ", "Antarctica"),
    ("AR", "Argentina"),
    ("AS", "American Samoa"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("AW", "Aruba"),
    ("AX", "Åland Islands"),
    ("AZ", "Azerbaijan"),
    ("BA", "Bosnia and Herzegovina"),
    ("BB", "Barbados"),
    ("BD", "Bangladesh"),
    ("BE", "Belgium"),
    ("BF", "Burkina Faso"),
    ("BG", "Bulgaria"),
    ("BH", "Bahrain"),
    ("BI", "Burundi"),
    ("BJ", "Benin"),
    ("BL", "Saint Barthélemy"),
    ("BM", "Bermuda"),
    ("BN", "Brunei"),
    ("BO", "Bolivia"),
    ("BQ", "Caribbean Netherlands"),
    ("BR", "Brazil"),
    ("BS", "Bahamas"),
    ("BT", "Bhutan"),
    ("BW", "Botswana"),
    ("BY", "Belarus"),
    ("BZ", "Belize"),
    ("CA", "Canada"),
    ("CC", "Cocos (Keeling) Islands"),
    ("CD", "Democratic Republic of the Congo"),
    ("CF", "Central African Republic"),
    ("CG", "Republic of the Congo"),
    ("CH", "Switzerland"),
    ("CI", "Côte d'Ivoire"),
    ("CK", "Cook Islands"),
    ("CL", "Chile"),
    ("CM", "Cameroon"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CU", "Cuba"),
    ("CV", "Cape Verde"),
    ("CW", "Curaçao"),
    ("CX", "Christmas Island"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DJ", "Djibouti"),
    ("DK", "Denmark"),
    ("DM", "Dominica"),
    ("DO", "Dominican Republic"),
    ("DZ", "Algeria"),
    ("EC", "Ecuador"),
    ("EE", "Estonia"),
    ("EG", "Egypt"),
    ("EH", "Western Sahara"),
    ("ER", "Eritrea"),
    ("ES", "Spain"),
    ("ET", "Ethiopia"),
    ("FI", "Finland"),
    ("FJ", "Fiji"),
    ("FK", "Falkland Islands"),
    ("FM", "Micronesia"),
    ("FO", "Faroe Islands"),
    ("FR", "France"),
    ("GA", "Gabon"),
    ("GB", "United Kingdom"),
    ("GD", "Grenada"),
    ("GE", "Georgia"),
    ("GF", "French Guiana"),
    ("GG", "Guernsey"),
    ("GH", "Ghana"),
    ("GI", "Gibraltar"),
    ("GL", "Greenland"),
    ("GM", "Gambia"),
    ("GN", "Guinea"),
    ("GP", "Guadeloupe"),
    ("GQ", "Equatorial Guinea"),
    ("GR", "Greece"),
    ("GS", "South Georgia and the South Sandwich Islands"),
    ("GT", "Guatemala"),
    ("GU", "Guam"),
    ("GW", "Guinea-Bissau"),
    ("GY", "Guyana"),
    ("HK", "Hong Kong"),
    ("HN", "Honduras"),
    ("HR", "Croatia"),
    ("HT", "Haiti"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IM", "Isle of Man"),
    ("IN", "India"),
    ("IO", "British Indian Ocean Territory"),
    ("IQ", "Iraq"),
    ("IR", "Iran"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JE", "Jersey"),
    ("JM", "Jamaica"),
    ("JO", "Jordan"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KG", "Kyrgyzstan"),
    ("KH", "Cambodia"),
    ("KI", "Kiribati"),
    ("KM", "Comoros"),
    ("KN", "Saint Kitts and Nevis"),
    ("KP", "North Korea"),
    ("KR", "South Korea"),
    ("KW", "Kuwait"),
    ("KY", "Cayman Islands"),
    ("KZ", "Kazakhstan"),
    ("LA", "Laos"),
    ("LB", "Lebanon"),
    ("LC", "Saint Lucia"),
    ("LI", "Liechtenstein"),
    ("LK", "Sri Lanka"),
    ("LR", "Liberia"),
    ("LS", "Lesotho"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("LY", "Libya"),
    ("MA", "Morocco"),
    ("MC", "Monaco"),
    ("MD", "Moldova"),
    ("ME", "Montenegro"),
    ("MF", "Saint Martin"),
    ("MG", "Madagascar"),
    ("MH", "Marshall Islands"),
    ("MK", "North Macedonia"),
    ("ML", "Mali"),
    ("MM", "Myanmar"),
    ("MN", "Mongolia"),
    ("MO", "Macao"),
    ("MP", "Northern Mariana Islands"),
    ("MQ", "Martinique"),
    ("MR", "Mauritania"),
    ("MS", "Montserrat"),
    ("MT", "Malta"),
    ("MU", "Mauritius"),
    ("MV", "Maldives"),
    ("MW", "Malawi"),
    ("MX", "Mexico"),
    ("MY", "Malaysia"),
    ("MZ", "Mozambique"),
    ("NA", "Namibia"),
    ("NC", "New Caledonia"),
    ("NE", "Niger"),
    ("NF", "Norfolk Island"),
    ("NG", "Nigeria"),
    ("NI", "Nicaragua"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NP", "Nepal"),
    ("NR", "Nauru"),
    ("NU", "Niue"),
    ("NZ", "New Zealand"),
    ("OM", "Oman"),
    ("PA", "Panama"),
    ("PE", "Peru"),
    ("PF", "French Polynesia"),
    ("PG", "Papua New Guinea"),
    ("PH", "Philippines"),
    ("PK", "Pakistan"),
    ("PL", "Poland"),
    ("PM", "Saint Pierre and Miquelon"),
    ("PN", "Pitcairn Islands"),
    ("PR", "Puerto Rico"),
    ("PS", "Palestine"),
    ("PT", "Portugal"),
    ("PW", "Palau"),
    ("PY", "Paraguay"),
    ("QA", "Qatar"),
    ("RE", "Réunion"),
    ("RO", "Romania"),
    ("RS", "Serbia"),
    ("RU", "Russia"),
    ("RW", "Rwanda"),
    ("SA", "Saudi Arabia"),
    ("SB", "Solomon Islands"),
    ("SC", "Seychelles"),
    ("SD", "Sudan"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("SH", "Saint Helena"),
    ("SI", "Slovenia"),
    ("SJ", "Svalbard and Jan Mayen"),
    ("SK", "Slovakia"),
    ("SL", "Sierra Leone"),
    ("SM", "San Marino"),
    ("SN", "Senegal"),
    ("SO", "Somalia"),
    ("SR", "Suriname"),
    ("SS", "South Sudan"),
    ("ST", "São Tomé and Príncipe"),
    ("SV", "El Salvador"),
    ("SX", "Sint Maarten"),
    ("SY", "Syria"),
    ("SZ", "Eswatini"),
    ("TC", "Turks and Caicos Islands"),
    ("TD", "Chad"),
    ("TF", "French Southern Territories"),
    ("TG", "Togo"),
    ("TH", "Thailand"),
    ("TJ", "Tajikistan"),
    ("TK", "Tokelau"),
    ("TL", "Timor-Leste"),
    ("TM", "Turkmenistan"),
    ("TN", "Tunisia"),
    ("TO", "Tonga"),
    ("TR", "Turkey"),
    ("TT", "Trinidad and Tobago"),
    ("TV", "Tuvalu"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzania"),
    ("UA", "Ukraine"),
    ("UG", "Uganda"),
    ("UM", "United States Minor Outlying Islands"),
    ("US", "United States of America"),
    ("UY", "Uruguay"),
    ("UZ", "Uzbekistan"),
    ("VA", "Vatican City"),
    ("VC", "Saint Vincent and the Grenadines"),
    ("VE", "Venezuela"),
    ("VG", "British Virgin Islands"),
    ("VI", "United States Virgin Islands"),
    ("VN", "Vietnam"),
    ("VU", "Vanuatu"),
    ("WF", "Wallis and Futuna"),
    ("WS", "Samoa"),
    ("YE", "Yemen"),
    ("YT", "Mayotte"),
    ("ZA", "South Africa"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];

/// Country code for a zone, if the zone belongs to a single country.
pub fn country_code_for(zone_id: &str) -> Option<&'static str> {
    ZONE_COUNTRIES
        .iter()
        .find(|(zone, _)| *zone == zone_id)
        .map(|(_, code)| *code)
}

/// English short name for an ISO 3166 alpha-2 code.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// `(code, name)` for a zone, when both are known.
pub fn country_for(zone_id: &str) -> Option<(&'static str, &'static str)> {
    let code = country_code_for(zone_id)?;
    country_name(code).map(|name| (code, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{TimeService, TzdbService};

    #[test]
    fn test_known_zone() {
        assert_eq!(country_for("Europe/Paris"), Some(("FR", "France")));
        assert_eq!(
            country_for("America/Argentina/Buenos_Aires"),
            Some(("AR", "Argentina"))
        );
    }

    #[test]
    fn test_small_countries_resolve() {
        assert_eq!(country_for("Europe/Zagreb"), Some(("HR", "Croatia")));
        assert_eq!(country_for("Europe/Ljubljana"), Some(("SI", "Slovenia")));
        assert_eq!(country_for("Europe/Bratislava"), Some(("SK", "Slovakia")));
        assert_eq!(country_for("Europe/Vaduz"), Some(("LI", "Liechtenstein")));
        assert_eq!(country_for("Arctic/Longyearbyen"), Some(("SJ", "Svalbard and Jan Mayen")));
    }

    #[test]
    fn test_legacy_names_resolve() {
        assert_eq!(country_code_for("Asia/Calcutta"), Some("IN"));
        assert_eq!(country_code_for("US/Eastern"), Some("US"));
        assert_eq!(country_code_for("Europe/Kiev"), Some("UA"));
    }

    #[test]
    fn test_every_regional_database_zone_has_a_country() {
        const REGIONS: [&str; 10] = [
            "Africa/",
            "America/",
            "Antarctica/",
            "Arctic/",
            "Asia/",
            "Atlantic/",
            "Australia/",
            "Europe/",
            "Indian/",
            "Pacific/",
        ];
        let missing: Vec<String> = TzdbService
            .zone_ids()
            .into_iter()
            .filter(|id| REGIONS.iter().any(|r| id.starts_with(r)))
            .filter(|id| country_for(id).is_none())
            .collect();
        assert!(missing.is_empty(), "zones without a country: {missing:?}");
    }

    #[test]
    fn test_unmapped_zone() {
        assert_eq!(country_for("Etc/UTC"), None);
        assert_eq!(country_for("Mars/Olympus_Mons"), None);
    }

    #[test]
    fn test_country_name_case_insensitive_code() {
        assert_eq!(country_name("de"), Some("Germany"));
        assert_eq!(country_name("XX"), None);
    }

    #[test]
    fn test_every_zone_code_has_a_name() {
        for (zone, code) in ZONE_COUNTRIES {
            assert!(
                country_name(code).is_some(),
                "{zone} maps to {code}, which has no name"
            );
        }
    }

    #[test]
    fn test_zone_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for (zone, _) in ZONE_COUNTRIES {
            assert!(seen.insert(*zone), "duplicate zone {zone}");
        }
    }
}
