// ==========================================
// 航线网络利润模拟 - 内置默认资源
// ==========================================
// 内容: 默认属性 / 默认航线图 / 默认航班数据
// 规则: 写入用户目录时不覆盖已存在文件
// ==========================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// 默认资源目录名
pub const DEFAULTS_DIR_NAME: &str = "airline-network-defaults";

/// 默认属性
pub const DEFAULT_PROPERTIES: &str = "\
# 飞行员薪资档位（单次飞行）
JUNIOR_PILOT_PAY=100.00
MIDLEVEL_PILOT_PAY=200.00
SENIOR_PILOT_PAY=300.00

# 图驱动模式航班模板
FLIGHT_AIRCRAFT_SIZE=l
SECTION_1_MAX_SEATS=10
SECTION_1_SEATS_FILLED=10
SECTION_1_SEAT_PRICE=100.00
SECTION_2_MAX_SEATS=20
SECTION_2_SEATS_FILLED=15
SECTION_2_SEAT_PRICE=80.00
SECTION_3_MAX_SEATS=30
SECTION_3_SEATS_FILLED=30
SECTION_3_SEAT_PRICE=50.00
SECTION_4_MAX_SEATS=40
SECTION_4_SEATS_FILLED=40
SECTION_4_SEAT_PRICE=30.00

# 航线消费顺序: sorted | insertion
EDGE_ORDER=sorted
";

/// 默认航线图: source|destination|distance
pub const DEFAULT_GRAPH: &str = "\
ATL|ORD|606
ATL|DFW|731
ORD|DFW|802
ORD|JFK|740
JFK|ATL|760
DFW|LAX|1235
LAX|SFO|337
SFO|ORD|1846
";

/// 默认航班数据: 16 个字段
///
/// source|destination|distance|size|max×4|filled×4|price×4
pub const DEFAULT_DATA: &str = "\
ATL|ORD|606|m|12|24|60|80|10|20|55|70|420.00|260.00|140.00|95.00
ORD|JFK|740|l|16|32|90|120|16|30|88|117|510.00|320.00|175.50|110.25
LAX|SFO|337|s|0|8|30|40|0|6|22|38|0|150.00|89.99|59.99
";

/// 默认资源文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPaths {
    pub properties: PathBuf,
    pub graph: PathBuf,
    pub data: PathBuf,
}

impl DefaultPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            properties: dir.join(super::properties::DEFAULT_PROPERTIES_FILE),
            graph: dir.join("default-graph"),
            data: dir.join("default-data"),
        }
    }
}

// ==========================================
// DefaultsLoader - 默认资源落盘
// ==========================================
pub struct DefaultsLoader;

impl DefaultsLoader {
    /// 在 dir 下创建默认资源文件（已存在则跳过）
    ///
    /// # 返回
    /// 三个默认文件的路径
    pub fn create_defaults_in(dir: &Path) -> io::Result<DefaultPaths> {
        fs::create_dir_all(dir)?;
        let paths = DefaultPaths::in_dir(dir);

        for (path, content) in [
            (&paths.properties, DEFAULT_PROPERTIES),
            (&paths.graph, DEFAULT_GRAPH),
            (&paths.data, DEFAULT_DATA),
        ] {
            if path.exists() {
                continue;
            }
            fs::write(path, content)?;
            info!("已写入默认文件 {}", path.display());
        }

        Ok(paths)
    }
}
