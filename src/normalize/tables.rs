//! 英文名 → 中文名映射表
//!
//! 所有表在首次访问时构建，之后只读。

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type NameTable = HashMap<&'static str, &'static str>;

fn build(pairs: &'static [(&'static str, &'static str)]) -> NameTable {
    pairs.iter().copied().collect()
}

/// 台湾县市（键为数据源中的英文名）
const TAIWAN_STATES: &[(&str, &str)] = &[
    ("Changhua", "彰化县"),
    ("Chiayi", "嘉义县"),
    ("Hsinchu", "新竹县"),
    ("Hualien", "花莲县"),
    ("Kaohsiung", "高雄市"),
    ("Keelung", "基隆市"),
    ("Kinmen", "金门县"),
    ("Lienchiang", "连江县"),
    ("Miaoli", "苗栗县"),
    ("Nantou", "南投县"),
    ("New Taipei", "新北市"),
    ("Penghu", "澎湖县"),
    ("Pingtung", "屏东县"),
    ("Taichung", "台中市"),
    ("Tainan", "台南市"),
    ("Taipei", "台北市"),
    ("Taitung", "台东县"),
    ("Taoyuan", "桃园市"),
    ("Yilan", "宜兰县"),
    ("Yunlin", "云林县"),
    ("Chiayi City", "嘉义市"),
    ("Hsinchu City", "新竹市"),
    ("Chiayi County", "嘉义县"),
    ("Hsinchu County", "新竹县"),
    ("Kinmen County", "金门县"),
    ("Penghu County", "澎湖县"),
    ("Hualien City", "花莲市"),
    ("Taichung City", "台中市"),
    ("Taipei City", "台北市"),
    ("Taitung City", "台东市"),
    ("Taoyuan City", "桃园市"),
];

/// 台湾区/市
const TAIWAN_CITIES: &[(&str, &str)] = &[
    ("Changhua", "彰化"),
    ("Yuanlin", "员林"),
    ("Chiayi", "嘉义"),
    ("Pizitou", "朴子头"),
    ("Chiayi County", "嘉义县"),
    ("Hsinchu", "新竹"),
    ("Hsinchu County", "新竹县"),
    ("Hualien", "花莲"),
    ("Hualien City", "花莲市"),
    ("Kaohsiung", "高雄"),
    ("Jincheng", "金城"),
    ("Kinmen County", "金门县"),
    ("Lienchiang", "连江"),
    ("Nangan", "南竿"),
    ("Miaoli", "苗栗"),
    ("Lugu", "鹿谷"),
    ("Nantou", "南投"),
    ("Puli", "埔里"),
    ("Zhongxing New Village", "中兴新村"),
    ("Magong", "马公"),
    ("Penghu County", "澎湖县"),
    ("Donggang", "东港"),
    ("Hengchun", "恒春"),
    ("Pingtung", "屏东"),
    ("Taichung", "台中"),
    ("Taichung City", "台中市"),
    ("Tainan", "台南"),
    ("Yujing", "玉井"),
    ("Banqiao", "板桥"),
    ("Jiufen", "九份"),
    ("Taipei", "台北"),
    ("Taipei City", "台北市"),
    ("Taitung", "台东"),
    ("Taitung City", "台东市"),
    ("Daxi", "大溪"),
    ("Taoyuan", "桃园"),
    ("Taoyuan City", "桃园市"),
    ("Yilan", "宜兰"),
    ("Douliu", "斗六"),
    ("Yunlin", "云林"),
];

/// 香港十八区及常用地名
const HONG_KONG: &[(&str, &str)] = &[
    ("Central and Western", "中西区"),
    ("Wan Chai", "湾仔区"),
    ("Eastern", "东区"),
    ("Southern", "南区"),
    ("Yau Tsim Mong", "油尖旺区"),
    ("Sham Shui Po", "深水埗区"),
    ("Kowloon City", "九龙城区"),
    ("Wong Tai Sin", "黄大仙区"),
    ("Kwun Tong", "观塘区"),
    ("Tsuen Wan", "荃湾区"),
    ("Tuen Mun", "屯门区"),
    ("Yuen Long", "元朗区"),
    ("North", "北区"),
    ("Tai Po", "大埔区"),
    ("Sai Kung", "西贡区"),
    ("Sha Tin", "沙田区"),
    ("Kwai Tsing", "葵青区"),
    ("Islands", "离岛区"),
    ("Hong Kong", "香港"),
    ("Hong Kong Island", "香港岛"),
    ("Kowloon", "九龙"),
    ("New Territories", "新界"),
    ("Victoria", "维多利亚城"),
];

/// 澳门堂区（葡文名与英文名）
const MACAU: &[(&str, &str)] = &[
    ("Nossa Senhora de Fátima", "花地玛堂区"),
    ("Our Lady of Fatima", "花地玛堂区"),
    ("Santo António", "圣安多尼堂区"),
    ("Saint Anthony", "圣安多尼堂区"),
    ("Sé", "大堂区"),
    ("Cathedral", "大堂区"),
    ("São Lázaro", "望德堂区"),
    ("Saint Lazarus", "望德堂区"),
    ("São Lourenço", "风顺堂区"),
    ("Saint Lawrence", "风顺堂区"),
    ("Nossa Senhora do Carmo", "嘉模堂区"),
    ("Our Lady of Carmel's", "嘉模堂区"),
    ("São Francisco Xavier", "圣方济各堂区"),
    ("Saint Francis Xavier", "圣方济各堂区"),
    ("Macau", "澳门"),
    ("Taipa", "氹仔"),
    ("Coloane", "路环"),
    ("Cotai", "路氹城"),
];

const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "亚拉巴马州"),
    ("Alaska", "阿拉斯加州"),
    ("Arizona", "亚利桑那州"),
    ("Arkansas", "阿肯色州"),
    ("California", "加利福尼亚州"),
    ("Colorado", "科罗拉多州"),
    ("Connecticut", "康涅狄格州"),
    ("Delaware", "特拉华州"),
    ("District of Columbia", "哥伦比亚特区"),
    ("Florida", "佛罗里达州"),
    ("Georgia", "佐治亚州"),
    ("Hawaii", "夏威夷州"),
    ("Idaho", "爱达荷州"),
    ("Illinois", "伊利诺伊州"),
    ("Indiana", "印第安纳州"),
    ("Iowa", "艾奥瓦州"),
    ("Kansas", "堪萨斯州"),
    ("Kentucky", "肯塔基州"),
    ("Louisiana", "路易斯安那州"),
    ("Maine", "缅因州"),
    ("Maryland", "马里兰州"),
    ("Massachusetts", "马萨诸塞州"),
    ("Michigan", "密歇根州"),
    ("Minnesota", "明尼苏达州"),
    ("Mississippi", "密西西比州"),
    ("Missouri", "密苏里州"),
    ("Montana", "蒙大拿州"),
    ("Nebraska", "内布拉斯加州"),
    ("Nevada", "内华达州"),
    ("New Hampshire", "新罕布什尔州"),
    ("New Jersey", "新泽西州"),
    ("New Mexico", "新墨西哥州"),
    ("New York", "纽约州"),
    ("North Carolina", "北卡罗来纳州"),
    ("North Dakota", "北达科他州"),
    ("Ohio", "俄亥俄州"),
    ("Oklahoma", "俄克拉何马州"),
    ("Oregon", "俄勒冈州"),
    ("Pennsylvania", "宾夕法尼亚州"),
    ("Rhode Island", "罗得岛州"),
    ("South Carolina", "南卡罗来纳州"),
    ("South Dakota", "南达科他州"),
    ("Tennessee", "田纳西州"),
    ("Texas", "得克萨斯州"),
    ("Utah", "犹他州"),
    ("Vermont", "佛蒙特州"),
    ("Virginia", "弗吉尼亚州"),
    ("Washington", "华盛顿州"),
    ("West Virginia", "西弗吉尼亚州"),
    ("Wisconsin", "威斯康星州"),
    ("Wyoming", "怀俄明州"),
];

const CANADA_PROVINCES: &[(&str, &str)] = &[
    ("Alberta", "艾伯塔省"),
    ("British Columbia", "不列颠哥伦比亚省"),
    ("Manitoba", "马尼托巴省"),
    ("New Brunswick", "新不伦瑞克省"),
    ("Newfoundland and Labrador", "纽芬兰与拉布拉多省"),
    ("Northwest Territories", "西北地区"),
    ("Nova Scotia", "新斯科舍省"),
    ("Nunavut", "努纳武特地区"),
    ("Ontario", "安大略省"),
    ("Prince Edward Island", "爱德华王子岛省"),
    ("Quebec", "魁北克省"),
    ("Saskatchewan", "萨斯喀彻温省"),
    ("Yukon", "育空地区"),
];

const AUSTRALIA_STATES: &[(&str, &str)] = &[
    ("Australian Capital Territory", "澳大利亚首都领地"),
    ("New South Wales", "新南威尔士州"),
    ("Northern Territory", "北领地"),
    ("Queensland", "昆士兰州"),
    ("South Australia", "南澳大利亚州"),
    ("Tasmania", "塔斯马尼亚州"),
    ("Victoria", "维多利亚州"),
    ("Western Australia", "西澳大利亚州"),
];

/// 日本都道府县，数据源名称可能带 "Prefecture" 后缀或长音符号
const JAPAN_PREFECTURES: &[(&str, &str)] = &[
    ("Hokkaido", "北海道"),
    ("Hokkaidō", "北海道"),
    ("Aomori", "青森县"),
    ("Iwate", "岩手县"),
    ("Miyagi", "宫城县"),
    ("Akita", "秋田县"),
    ("Yamagata", "山形县"),
    ("Fukushima", "福岛县"),
    ("Ibaraki", "茨城县"),
    ("Tochigi", "栃木县"),
    ("Gunma", "群马县"),
    ("Saitama", "埼玉县"),
    ("Chiba", "千叶县"),
    ("Tokyo", "东京都"),
    ("Kanagawa", "神奈川县"),
    ("Niigata", "新潟县"),
    ("Toyama", "富山县"),
    ("Ishikawa", "石川县"),
    ("Fukui", "福井县"),
    ("Yamanashi", "山梨县"),
    ("Nagano", "长野县"),
    ("Gifu", "岐阜县"),
    ("Shizuoka", "静冈县"),
    ("Aichi", "爱知县"),
    ("Mie", "三重县"),
    ("Shiga", "滋贺县"),
    ("Kyoto", "京都府"),
    ("Kyōto", "京都府"),
    ("Osaka", "大阪府"),
    ("Ōsaka", "大阪府"),
    ("Hyogo", "兵库县"),
    ("Hyōgo", "兵库县"),
    ("Nara", "奈良县"),
    ("Wakayama", "和歌山县"),
    ("Tottori", "鸟取县"),
    ("Shimane", "岛根县"),
    ("Okayama", "冈山县"),
    ("Hiroshima", "广岛县"),
    ("Yamaguchi", "山口县"),
    ("Tokushima", "德岛县"),
    ("Kagawa", "香川县"),
    ("Ehime", "爱媛县"),
    ("Kochi", "高知县"),
    ("Kōchi", "高知县"),
    ("Fukuoka", "福冈县"),
    ("Saga", "佐贺县"),
    ("Nagasaki", "长崎县"),
    ("Kumamoto", "熊本县"),
    ("Oita", "大分县"),
    ("Ōita", "大分县"),
    ("Miyazaki", "宫崎县"),
    ("Kagoshima", "鹿儿岛县"),
    ("Okinawa", "冲绳县"),
];

const KOREA_PROVINCES: &[(&str, &str)] = &[
    ("Seoul", "首尔特别市"),
    ("Busan", "釜山广域市"),
    ("Daegu", "大邱广域市"),
    ("Incheon", "仁川广域市"),
    ("Gwangju", "光州广域市"),
    ("Daejeon", "大田广域市"),
    ("Ulsan", "蔚山广域市"),
    ("Sejong", "世宗特别自治市"),
    ("Gyeonggi", "京畿道"),
    ("Gangwon", "江原道"),
    ("North Chungcheong", "忠清北道"),
    ("South Chungcheong", "忠清南道"),
    ("North Jeolla", "全罗北道"),
    ("South Jeolla", "全罗南道"),
    ("North Gyeongsang", "庆尚北道"),
    ("South Gyeongsang", "庆尚南道"),
    ("Jeju", "济州特别自治道"),
];

const UK_COUNTRIES: &[(&str, &str)] = &[
    ("England", "英格兰"),
    ("Scotland", "苏格兰"),
    ("Wales", "威尔士"),
    ("Northern Ireland", "北爱尔兰"),
];

const GERMANY_STATES: &[(&str, &str)] = &[
    ("Baden-Württemberg", "巴登-符腾堡州"),
    ("Bavaria", "巴伐利亚州"),
    ("Berlin", "柏林"),
    ("Brandenburg", "勃兰登堡州"),
    ("Bremen", "不来梅"),
    ("Hamburg", "汉堡"),
    ("Hesse", "黑森州"),
    ("Lower Saxony", "下萨克森州"),
    ("Mecklenburg-Vorpommern", "梅克伦堡-前波美拉尼亚州"),
    ("North Rhine-Westphalia", "北莱茵-威斯特法伦州"),
    ("Rhineland-Palatinate", "莱茵兰-普法尔茨州"),
    ("Saarland", "萨尔州"),
    ("Saxony", "萨克森州"),
    ("Saxony-Anhalt", "萨克森-安哈尔特州"),
    ("Schleswig-Holstein", "石勒苏益格-荷尔斯泰因州"),
    ("Thuringia", "图林根州"),
];

const FRANCE_REGIONS: &[(&str, &str)] = &[
    ("Auvergne-Rhône-Alpes", "奥弗涅-罗讷-阿尔卑斯大区"),
    ("Bourgogne-Franche-Comté", "勃艮第-弗朗什-孔泰大区"),
    ("Brittany", "布列塔尼大区"),
    ("Centre-Val de Loire", "中央-卢瓦尔河谷大区"),
    ("Corsica", "科西嘉"),
    ("Grand Est", "大东部大区"),
    ("Hauts-de-France", "上法兰西大区"),
    ("Île-de-France", "法兰西岛大区"),
    ("Normandy", "诺曼底大区"),
    ("Nouvelle-Aquitaine", "新阿基坦大区"),
    ("Occitanie", "奥克西塔尼大区"),
    ("Pays de la Loire", "卢瓦尔河地区大区"),
    ("Provence-Alpes-Côte d'Azur", "普罗旺斯-阿尔卑斯-蓝色海岸大区"),
];

/// 不区分国家的常见城市名
const WORLD_CITIES: &[(&str, &str)] = &[
    ("New York", "纽约"),
    ("Los Angeles", "洛杉矶"),
    ("San Francisco", "旧金山"),
    ("San Jose", "圣何塞"),
    ("San Diego", "圣迭戈"),
    ("Sacramento", "萨克拉门托"),
    ("Chicago", "芝加哥"),
    ("Seattle", "西雅图"),
    ("Boston", "波士顿"),
    ("Washington", "华盛顿"),
    ("Houston", "休斯敦"),
    ("Dallas", "达拉斯"),
    ("Austin", "奥斯汀"),
    ("Miami", "迈阿密"),
    ("Orlando", "奥兰多"),
    ("Las Vegas", "拉斯维加斯"),
    ("Philadelphia", "费城"),
    ("Pittsburgh", "匹兹堡"),
    ("Toronto", "多伦多"),
    ("Vancouver", "温哥华"),
    ("Montreal", "蒙特利尔"),
    ("Ottawa", "渥太华"),
    ("Calgary", "卡尔加里"),
    ("Edmonton", "埃德蒙顿"),
    ("Sydney", "悉尼"),
    ("Melbourne", "墨尔本"),
    ("Brisbane", "布里斯班"),
    ("Gold Coast", "黄金海岸"),
    ("Perth", "珀斯"),
    ("Adelaide", "阿德莱德"),
    ("Canberra", "堪培拉"),
    ("Tokyo", "东京"),
    ("Osaka", "大阪"),
    ("Kyoto", "京都"),
    ("Yokohama", "横滨"),
    ("Kawasaki", "川崎"),
    ("Nagoya", "名古屋"),
    ("Sapporo", "札幌"),
    ("Fukuoka", "福冈"),
    ("Seoul", "首尔"),
    ("Busan", "釜山"),
    ("Incheon", "仁川"),
    ("London", "伦敦"),
    ("Manchester", "曼彻斯特"),
    ("Birmingham", "伯明翰"),
    ("Edinburgh", "爱丁堡"),
    ("Glasgow", "格拉斯哥"),
    ("Cardiff", "加的夫"),
    ("Belfast", "贝尔法斯特"),
    ("Berlin", "柏林"),
    ("Munich", "慕尼黑"),
    ("Hamburg", "汉堡"),
    ("Frankfurt", "法兰克福"),
    ("Cologne", "科隆"),
    ("Paris", "巴黎"),
    ("Lyon", "里昂"),
    ("Marseille", "马赛"),
    ("Nice", "尼斯"),
    ("Singapore", "新加坡"),
    ("Bangkok", "曼谷"),
    ("Moscow", "莫斯科"),
    ("Dubai", "迪拜"),
];

/// ISO 3166 国家代码 → 中文名
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AD", "安道尔"),
    ("AE", "阿联酋"),
    ("AF", "阿富汗"),
    ("AG", "安提瓜和巴布达"),
    ("AI", "安圭拉"),
    ("AL", "阿尔巴尼亚"),
    ("AM", "亚美尼亚"),
    ("AO", "安哥拉"),
    ("AQ", "南极洲"),
    ("AR", "阿根廷"),
    ("AS", "美属萨摩亚"),
    ("AT", "奥地利"),
    ("AU", "澳大利亚"),
    ("AW", "阿鲁巴"),
    ("AX", "奥兰群岛"),
    ("AZ", "阿塞拜疆"),
    ("BA", "波斯尼亚和黑塞哥维那"),
    ("BB", "巴巴多斯"),
    ("BD", "孟加拉国"),
    ("BE", "比利时"),
    ("BF", "布基纳法索"),
    ("BG", "保加利亚"),
    ("BH", "巴林"),
    ("BI", "布隆迪"),
    ("BJ", "贝宁"),
    ("BL", "圣巴泰勒米"),
    ("BM", "百慕大"),
    ("BN", "文莱"),
    ("BO", "玻利维亚"),
    ("BQ", "荷兰加勒比区"),
    ("BR", "巴西"),
    ("BS", "巴哈马"),
    ("BT", "不丹"),
    ("BV", "布韦岛"),
    ("BW", "博茨瓦纳"),
    ("BY", "白俄罗斯"),
    ("BZ", "伯利兹"),
    ("CA", "加拿大"),
    ("CC", "科科斯（基林）群岛"),
    ("CD", "刚果（金）"),
    ("CF", "中非"),
    ("CG", "刚果（布）"),
    ("CH", "瑞士"),
    ("CI", "科特迪瓦"),
    ("CK", "库克群岛"),
    ("CL", "智利"),
    ("CM", "喀麦隆"),
    ("CO", "哥伦比亚"),
    ("CR", "哥斯达黎加"),
    ("CU", "古巴"),
    ("CV", "佛得角"),
    ("CW", "库拉索"),
    ("CX", "圣诞岛"),
    ("CY", "塞浦路斯"),
    ("CZ", "捷克"),
    ("DE", "德国"),
    ("DJ", "吉布提"),
    ("DK", "丹麦"),
    ("DM", "多米尼克"),
    ("DO", "多米尼加"),
    ("DZ", "阿尔及利亚"),
    ("EC", "厄瓜多尔"),
    ("EE", "爱沙尼亚"),
    ("EG", "埃及"),
    ("EH", "西撒哈拉"),
    ("ER", "厄立特里亚"),
    ("ES", "西班牙"),
    ("ET", "埃塞俄比亚"),
    ("FI", "芬兰"),
    ("FJ", "斐济"),
    ("FK", "福克兰群岛"),
    ("FM", "密克罗尼西亚联邦"),
    ("FO", "法罗群岛"),
    ("FR", "法国"),
    ("GA", "加蓬"),
    ("GB", "英国"),
    ("GD", "格林纳达"),
    ("GE", "格鲁吉亚"),
    ("GF", "法属圭亚那"),
    ("GG", "根西岛"),
    ("GH", "加纳"),
    ("GI", "直布罗陀"),
    ("GL", "格陵兰"),
    ("GM", "冈比亚"),
    ("GN", "几内亚"),
    ("GP", "瓜德罗普"),
    ("GQ", "赤道几内亚"),
    ("GR", "希腊"),
    ("GS", "南乔治亚和南桑威奇群岛"),
    ("GT", "危地马拉"),
    ("GU", "关岛"),
    ("GW", "几内亚比绍"),
    ("GY", "圭亚那"),
    ("HK", "中国香港"),
    ("HM", "赫德岛和麦克唐纳群岛"),
    ("HN", "洪都拉斯"),
    ("HR", "克罗地亚"),
    ("HT", "海地"),
    ("HU", "匈牙利"),
    ("ID", "印度尼西亚"),
    ("IE", "爱尔兰"),
    ("IL", "以色列"),
    ("IM", "马恩岛"),
    ("IN", "印度"),
    ("IO", "英属印度洋领地"),
    ("IQ", "伊拉克"),
    ("IR", "伊朗"),
    ("IS", "冰岛"),
    ("IT", "意大利"),
    ("JE", "泽西岛"),
    ("JM", "牙买加"),
    ("JO", "约旦"),
    ("JP", "日本"),
    ("KE", "肯尼亚"),
    ("KG", "吉尔吉斯斯坦"),
    ("KH", "柬埔寨"),
    ("KI", "基里巴斯"),
    ("KM", "科摩罗"),
    ("KN", "圣基茨和尼维斯"),
    ("KP", "朝鲜"),
    ("KR", "韩国"),
    ("KW", "科威特"),
    ("KY", "开曼群岛"),
    ("KZ", "哈萨克斯坦"),
    ("LA", "老挝"),
    ("LB", "黎巴嫩"),
    ("LC", "圣卢西亚"),
    ("LI", "列支敦士登"),
    ("LK", "斯里兰卡"),
    ("LR", "利比里亚"),
    ("LS", "莱索托"),
    ("LT", "立陶宛"),
    ("LU", "卢森堡"),
    ("LV", "拉脱维亚"),
    ("LY", "利比亚"),
    ("MA", "摩洛哥"),
    ("MC", "摩纳哥"),
    ("MD", "摩尔多瓦"),
    ("ME", "黑山"),
    ("MF", "法属圣马丁"),
    ("MG", "马达加斯加"),
    ("MH", "马绍尔群岛"),
    ("MK", "北马其顿"),
    ("ML", "马里"),
    ("MM", "缅甸"),
    ("MN", "蒙古"),
    ("MO", "中国澳门"),
    ("MP", "北马里亚纳群岛"),
    ("MQ", "马提尼克"),
    ("MR", "毛里塔尼亚"),
    ("MS", "蒙特塞拉特"),
    ("MT", "马耳他"),
    ("MU", "毛里求斯"),
    ("MV", "马尔代夫"),
    ("MW", "马拉维"),
    ("MX", "墨西哥"),
    ("MY", "马来西亚"),
    ("MZ", "莫桑比克"),
    ("NA", "纳米比亚"),
    ("NC", "新喀里多尼亚"),
    ("NE", "尼日尔"),
    ("NF", "诺福克岛"),
    ("NG", "尼日利亚"),
    ("NI", "尼加拉瓜"),
    ("NL", "荷兰"),
    ("NO", "挪威"),
    ("NP", "尼泊尔"),
    ("NR", "瑙鲁"),
    ("NU", "纽埃"),
    ("NZ", "新西兰"),
    ("OM", "阿曼"),
    ("PA", "巴拿马"),
    ("PE", "秘鲁"),
    ("PF", "法属波利尼西亚"),
    ("PG", "巴布亚新几内亚"),
    ("PH", "菲律宾"),
    ("PK", "巴基斯坦"),
    ("PL", "波兰"),
    ("PM", "圣皮埃尔和密克隆"),
    ("PN", "皮特凯恩群岛"),
    ("PR", "波多黎各"),
    ("PS", "巴勒斯坦"),
    ("PT", "葡萄牙"),
    ("PW", "帕劳"),
    ("PY", "巴拉圭"),
    ("QA", "卡塔尔"),
    ("RE", "留尼汪"),
    ("RO", "罗马尼亚"),
    ("RS", "塞尔维亚"),
    ("RU", "俄罗斯"),
    ("RW", "卢旺达"),
    ("SA", "沙特阿拉伯"),
    ("SB", "所罗门群岛"),
    ("SC", "塞舌尔"),
    ("SD", "苏丹"),
    ("SE", "瑞典"),
    ("SG", "新加坡"),
    ("SH", "圣赫勒拿"),
    ("SI", "斯洛文尼亚"),
    ("SJ", "斯瓦尔巴和扬马延"),
    ("SK", "斯洛伐克"),
    ("SL", "塞拉利昂"),
    ("SM", "圣马力诺"),
    ("SN", "塞内加尔"),
    ("SO", "索马里"),
    ("SR", "苏里南"),
    ("SS", "南苏丹"),
    ("ST", "圣多美和普林西比"),
    ("SV", "萨尔瓦多"),
    ("SX", "荷属圣马丁"),
    ("SY", "叙利亚"),
    ("SZ", "斯威士兰"),
    ("TC", "特克斯和凯科斯群岛"),
    ("TD", "乍得"),
    ("TF", "法属南部领地"),
    ("TG", "多哥"),
    ("TH", "泰国"),
    ("TJ", "塔吉克斯坦"),
    ("TK", "托克劳"),
    ("TL", "东帝汶"),
    ("TM", "土库曼斯坦"),
    ("TN", "突尼斯"),
    ("TO", "汤加"),
    ("TR", "土耳其"),
    ("TT", "特立尼达和多巴哥"),
    ("TV", "图瓦卢"),
    ("TW", "中国台湾"),
    ("TZ", "坦桑尼亚"),
    ("UA", "乌克兰"),
    ("UG", "乌干达"),
    ("UM", "美国本土外小岛屿"),
    ("US", "美国"),
    ("UY", "乌拉圭"),
    ("UZ", "乌兹别克斯坦"),
    ("VA", "梵蒂冈"),
    ("VC", "圣文森特和格林纳丁斯"),
    ("VE", "委内瑞拉"),
    ("VG", "英属维尔京群岛"),
    ("VI", "美属维尔京群岛"),
    ("VN", "越南"),
    ("VU", "瓦努阿图"),
    ("WF", "瓦利斯和富图纳"),
    ("WS", "萨摩亚"),
    ("XK", "科索沃"),
    ("YE", "也门"),
    ("YT", "马约特"),
    ("ZA", "南非"),
    ("ZM", "赞比亚"),
    ("ZW", "津巴布韦"),
];

pub static TAIWAN_STATE_NAMES: Lazy<NameTable> = Lazy::new(|| build(TAIWAN_STATES));
pub static TAIWAN_CITY_NAMES: Lazy<NameTable> = Lazy::new(|| build(TAIWAN_CITIES));
pub static HONG_KONG_NAMES: Lazy<NameTable> = Lazy::new(|| build(HONG_KONG));
pub static MACAU_NAMES: Lazy<NameTable> = Lazy::new(|| build(MACAU));
pub static US_STATE_NAMES: Lazy<NameTable> = Lazy::new(|| build(US_STATES));
pub static CANADA_PROVINCE_NAMES: Lazy<NameTable> = Lazy::new(|| build(CANADA_PROVINCES));
pub static AUSTRALIA_STATE_NAMES: Lazy<NameTable> = Lazy::new(|| build(AUSTRALIA_STATES));
pub static JAPAN_PREFECTURE_NAMES: Lazy<NameTable> = Lazy::new(|| build(JAPAN_PREFECTURES));
pub static KOREA_PROVINCE_NAMES: Lazy<NameTable> = Lazy::new(|| build(KOREA_PROVINCES));
pub static UK_COUNTRY_NAMES: Lazy<NameTable> = Lazy::new(|| build(UK_COUNTRIES));
pub static GERMANY_STATE_NAMES: Lazy<NameTable> = Lazy::new(|| build(GERMANY_STATES));
pub static FRANCE_REGION_NAMES: Lazy<NameTable> = Lazy::new(|| build(FRANCE_REGIONS));
pub static WORLD_CITY_NAMES: Lazy<NameTable> = Lazy::new(|| build(WORLD_CITIES));
pub static COUNTRY_DISPLAY_NAMES: Lazy<NameTable> = Lazy::new(|| build(COUNTRY_NAMES));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for pairs in [
            TAIWAN_STATES,
            TAIWAN_CITIES,
            HONG_KONG,
            MACAU,
            US_STATES,
            JAPAN_PREFECTURES,
            WORLD_CITIES,
            COUNTRY_NAMES,
        ] {
            assert_eq!(build(pairs).len(), pairs.len());
        }
    }

    #[test]
    fn test_hong_kong_has_eighteen_districts() {
        let districts = HONG_KONG.iter().filter(|(_, zh)| zh.ends_with('区')).count();
        assert_eq!(districts, 18);
    }
}
