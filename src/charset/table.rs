// Simplified forms, position-aligned with TRADITIONAL.
pub(super) const SIMPLIFIED: &str = concat!(
	"计订讣认讥讦讧讨让讪讫训议讯记讲讳讴讵讶讷许讹论讼讽设访诀证诂诃评诅识诈诉诊诋诌",
	"词诎诏译诒诓诔试诖诗诘诙诚诛诜话诞诟诠诡询诣诤该详诧诨诩诫诬语诮误诰诱诲诳说诵诶",
	"请诸诹诺读诼诽课诿谀谁谂调谄谅谆谇谈谊谋谌谍谎谏谐谑谒谓谔谕谖谗谘谙谚谛谜谝谟谠",
	"谡谢谣谤谥谦谧谨谩谪谬谭谮谯谰谱谲谳谴谵谶誊詟雠訚钆钇针钉钊钋钌钍钎钏钐钒钓钔钕",
	"钗钙钚钛钜钝钞钟钠钡钢钣钤钥钦钧钨钩钪钫钬钭钮钯钰钱钲钳钴钵钶钷钸钹钺钻钼钽钾钿",
	"铀铁铂铃铄铅铆铈铉铊铋铌铍铎铐铑铒铕铖铗铘铙铛铜铝铟铠铡铢铣铤铥铧铨铩铪铫铬铭铮",
	"铯铰铱铲铳铴铵银铷铸铹铺铼铽链铿销锁锂锃锄锅锆锇锈锉锊锋锌锎锏锐锑锒锓锔锕锖锗错",
	"锚锛锞锟锡锢锣锤锥锦锩锪锫锬锭键锯锰锱锲锴锵锶锷锸锹锺锻锼锾锿镀镁镂镄镅镆镇镉镊",
	"镌镍镎镏镐镑镒镓镔镖镗镘镙镛镜镝镞镟镡镢镣镤镦镧镨镩镪镫镬镭镯镰镱镲镳镶鉴銮錾纠",
	"纡红纣纤纥约级纨纩纪纫纬纭纯纰纱纲纳纵纶纷纸纹纺纽纾线绀绁绂练组绅细织终绉绊绋绌",
	"绍绎经绐绑绒结绔绕绗绘给绚绛络绝绞统绠绡绢绣绥绦继绨绩绪绫续绮绯绰绲绳维绵绶绷绸",
	"绺绻综绽绾绿缀缁缂缃缄缅缆缇缈缉缊缋缌缍缎缏缑缒缓缔缕编缗缘缙缚缛缜缝缟缠缡缢缣",
	"缤缥缦缧缨缩缪缫缬缭缮缯缰缱缲缳缴丝紧絷萦饥饦饧饨饩饪饫饬饭饮饯饰饱饲饴饵饶饷饺",
	"饼饽饿馀馁馄馅馆馈馊馋馍馏馐馑馒馓馔馕糇贝贞负贡财责贤败账货质贩贪贫贬购贮贯贰贱",
	"贲贳贴贵贶贷贸费贺贻贼贽贾贿赀赁赂赃资赅赆赇赈赉赊赋赌赍赎赏赐赓赔赕赖赘赙赚赛赜",
	"赝赞赟赠赡赢赣实琐唢页顶顷项顺须顼顽顾顿颀颁颂颃预颅领颇颈颉颊颌颍颏颐频颓颔颖颗",
	"题颚颛颜额颞颟颠颡颢颤颦颧马驭冯驮驯驰驱驳驴驵驶驷驸驹驺驻驼驽驾骀驿骁骂骄骅骆骇",
	"骈骊骋验骏骐骑骒骓骖骗骘骚骛骜骝骞骟骠骡骢骤骥骧妈吗玛码蚂犸杩笃蓦腾鸟凫鸠鸡鸢鸣",
	"鸥鸦鸨鸩鸪鸫鸬鸭鸮鸯鸱鸲鸳鸵鸶鸷鸸鸹鸺鸽鸾鸿鹁鹂鹃鹄鹅鹆鹈鹉鹊鹌鹎鹏鹑鹕鹗鹘鹚鹜",
	"鹞鹣鹤鹦鹧鹨鹩鹪鹫鹬鹭鹰鹳岛枭袅茑莺鱼鱿鲁鲂鲅鲆鲶鲇鲈鲋鲍鲎鲐鲑鲒鲔鲕鲚鲛鲜鲞鲟",
	"鲠鲡鲢鲣鲤鲥鲦鲧鲨鲩鲫鲭鲮鲰鲱鲲鲳鲴鲵鲷鲸鲻鲼鲽鳃鳄鳅鳆鳇鳊鳌鳍鳎鳏鳐鳓鳔鳕鳖鳗",
	"鳙鳜鳝鳞鳟鳢苏噜撸橹稣车轧轨轩轫转轭轮软轰轱轲轳轴轵轶轸轹轺轻轼载轾轿辁辂较辄辅",
	"辆辇辈辉辊辋辍辎辏辐辑输辔辕辖辗辘辙辚阵库连莲涟裤挥晖珲恽荤浑军堑暂渐惭斩崭椠毂",
	"门闩闪闫闭问闯闰闱闲闳间闵闷闸闹闺闻闼闽闾阀阁阂阃阄阅阆阈阉阊阋阍阎阏阐阑阒阔阕",
	"阖阗阙阚们扪焖涧裥简悯见观规觅视览觉觊觋觌觎觏觐觑觇舰枧苋砚蚬现宽岘风飏飐飑飒飓",
	"飕飘飙枫疯岚韦韧韩韪韫韬违围伟苇玮炜帏齿龀龃龄龅龆龇龈龉龊龋龌啮龙垄拢陇笼聋胧珑",
	"泷砻栊咙庞宠袭龚龛茏眬昽麦麸黾鼋鼍蝇渑卤鹾龟仑伦抡沦囵仓枪抢苍沧疮舱创呛跄炝怆玱",
	"区欧殴瓯呕躯枢抠岖妪沤眍单弹掸禅蝉婵惮郸殚瘅箪战啴发泼废拨尧挠烧浇晓侥娆翘跷峣硗",
	"荛蛲桡哓乔桥侨娇矫峤荞挢鞒戋浅残栈践盏笺溅戗专传砖团抟啭东冻栋陈岽当挡档裆珰刍邹",
	"趋雏皱卢庐芦炉泸栌胪垆舻为伪执垫挚蛰尽烬坚肾竖悭监蓝篮滥槛褴揽榄历沥枥疬苈雳厉励",
	"砺疠蛎粝夹侠峡狭挟荚蛱惬箧郏浃硖两俩魉满瞒螨来莱睐崃徕涞梾丽俪逦郦华哗桦晔烨会烩",
	"荟哙侩狯桧脍刽郐冈刚岗网呙祸涡窝蜗莴亚哑恶壶垩娅桠氩垭痖将蒋奖桨浆酱寿涛祷筹畴俦",
	"踌焘帱梼齐济挤剂荠跻霁脐蛴齑侪哜佥检险剑脸签敛殓俭捡莶睑猃蔹泽择释峄卖渎犊牍椟黩",
	"窦严俨酽义仪蚁舣乐砾烁栎泺万迈趸虿与屿举誉欤兴学搅黉喾兰拦栏烂澜斓炼拣踬宾滨槟膑",
	"殡鬓嫔毕跸筚哔惯掼参惨渗掺碜糁毵圣柽写泻审婶宪宝宁拧狞柠泞咛聍对导层属嘱瞩岁秽哕",
	"币师狮筛蛳帅带滞帮广扩矿旷犷圹厂庆应开异张帐胀涨长伥怅枨弯湾峦恋蛮栾孪娈挛脔滦变",
	"归录箓彻忆怀坏态惊扑扫扬杨疡炀旸玚护沪担胆拥挂换唤焕痪涣奂损据剧数楼搂偻喽蝼篓屡",
	"褛髅娄蒌嵝瘘耧断旧显湿术机几叽玑矶杀杂权劝欢条涤极构沟样汇没泪洁测侧恻厕浓农脓哝",
	"侬润温灭灯邓灵点烟热爷牵犹独烛触浊猎腊蜡猫献环还画畅疗辽痒盐盖盘睁挣争筝狰峥础礼",
	"离篱秃积穷窃竞笔筑节粮联职帜炽肃萧啸潇箫肤胜脚艺苹荣营萤莹荥荧劳捞涝唠崂痨耢茔茕",
	"嵘蝾药获萝逻罗箩椤猡虑滤摅虫虾补装赶跃迁适递遗邮邻郑掷踯队坠阳阴荫阶际陆随隐瘾难",
	"滩摊瘫雾务静黄横国这个时过挝后关书电爱嗳瑷暧嫒亲衬头脑恼体业邺产萨浐动恸运酝郓进",
	"琎远园选边达挞鞑跶哒种肿称类汉叹气忾总从苁耸怂枞众伞无怃妩芜庑压图圆场肠汤烫荡伤",
	"殇觞块报声处复夺奋妇孙逊荪狲岭庄桩脏戏标荐册粤卫乡响飨养仅厅双叶号吓听启员呜咏哟",
	"啰喷嘘坟坛垒备够夸奥妆娱婴寻尔尘尝岂帧并庙弃弥彦径忧怜恳悦惧惩愤愿扰抚抛拟掳掴搀",
	"摄摆摇撑擞敌斋昙晋晒晕柜树梦椭樱歼毙毡洒浏渊渔溃滚潜灾烦状狱猪痴皑盗硕确碍稳窍笋",
	"罚罢羡习耻聂聪胁胶脉舆艳茎虏虚虽蚀蚕衅袜赵踪躏迟隶靓韵飞丢丧丰临么乌买乱亏亩亵亿",
	"价优伛侣侦俣债倾偬偿傥傧储傩儿兑兖兹兽冁决况净凉减凑凛凤凭凯击凿刘则删别刬刭刿剀",
	"剐办劢劲势勋勚匀匦匮医协卧却厌厍厢厣厦厨厩厮县叆叇叙叠吣吨吴呐呒呓呖呗咝唛唝唡啧",
	"啬嗫嘤嚣囱坜坝坞垦垲垴埘埙埚堕墙壮壳壸奁妫娲娴婳媪嫱嬷寝尴屉届屦岿崄嵚巅巩巯帻帼",
	"幂庼廪弑弪忏怄怼怿恹恺悫悬惫愠愦慑慭懑懒懔戆戬挜挦捣揸揿搁携摈撄撵撷撺攒昼杰枣栀",
	"栅栉桢桤棂椁榇榈榉槚槠樯橥橱橼殁殒氇氢氲汹沣沩泶泾洼浈浍浒浔涠涩渌渍渖溆滗滟滠滢",
	"滪漤潆潋潍潴濑濒灏灿炖烃牦牺狈狝猕猬獭玙玺珐琏琼璎瓒疖疟疱痈痉痫瘆瘗瘪瘿癞癣癫皲",
	"眦矾砀砗硙碛祎祢祯禀禄秆秾穑窑窜窥窭笕笾箦箨篑簖籁籴籼粜粪罂罴羁羟肮胫脶腘腭腻腼",
	"腽艰芗苌苎茧荜荦荨荩荭莅莳莸莼萚葱蒇蒉蓟蓠蓣蓥蔷蔺蔼蕲蕴薮藓虬虮蚝蛊蛏蝈衔衮袄裈",
	"裢裣觯趱跞跹踊蹑蹒蹰蹿躜辞辩辫迩迳迹邝邬郧酾酿陉陕陧陨隽霭靥鞯髋髌魇黡黪",
);

pub(super) const TRADITIONAL: &str = concat!(
	"計訂訃認譏訐訌討讓訕訖訓議訊記講諱謳詎訝訥許訛論訟諷設訪訣證詁訶評詛識詐訴診詆謅",
	"詞詘詔譯詒誆誄試詿詩詰詼誠誅詵話誕詬詮詭詢詣諍該詳詫諢詡誡誣語誚誤誥誘誨誑說誦誒",
	"請諸諏諾讀諑誹課諉諛誰諗調諂諒諄誶談誼謀諶諜謊諫諧謔謁謂諤諭諼讒諮諳諺諦謎諞謨讜",
	"謖謝謠謗謚謙謐謹謾謫謬譚譖譙讕譜譎讞譴譫讖謄讋讎誾釓釔針釘釗釙釕釷釺釧釤釩釣鍆釹",
	"釵鈣鈈鈦鉅鈍鈔鐘鈉鋇鋼鈑鈐鑰欽鈞鎢鉤鈧鈁鈥鈄鈕鈀鈺錢鉦鉗鈷鉢鈳鉕鈽鈸鉞鑽鉬鉭鉀鈿",
	"鈾鐵鉑鈴鑠鉛鉚鈰鉉鉈鉍鈮鈹鐸銬銠鉺銪鋮鋏鋣鐃鐺銅鋁銦鎧鍘銖銑鋌銩鏵銓鎩鉿銚鉻銘錚",
	"銫鉸銥鏟銃鐋銨銀銣鑄鐒鋪錸鋱鏈鏗銷鎖鋰鋥鋤鍋鋯鋨鏽銼鋝鋒鋅鐦鐧銳銻鋃鋟鋦錒錆鍺錯",
	"錨錛錁錕錫錮鑼錘錐錦錈鍃錇錟錠鍵鋸錳錙鍥鍇鏘鍶鍔鍤鍬鍾鍛鎪鍰鎄鍍鎂鏤鐨鎇鏌鎮鎘鑷",
	"鐫鎳鎿鎦鎬鎊鎰鎵鑌鏢鏜鏝鏍鏞鏡鏑鏃鏇鐔钁鐐鏷鐓鑭鐠鑹鏹鐙鑊鐳鐲鐮鐿鑔鑣鑲鑒鑾鏨糾",
	"紆紅紂纖紇約級紈纊紀紉緯紜純紕紗綱納縱綸紛紙紋紡紐紓線紺紲紱練組紳細織終縐絆紼絀",
	"紹繹經紿綁絨結絝繞絎繪給絢絳絡絕絞統綆綃絹繡綏絛繼綈績緒綾續綺緋綽緄繩維綿綬繃綢",
	"綹綣綜綻綰綠綴緇緙緗緘緬纜緹緲緝縕繢緦綞緞緶緱縋緩締縷編緡緣縉縛縟縝縫縞纏縭縊縑",
	"繽縹縵縲纓縮繆繅纈繚繕繒韁繾繰繯繳絲緊縶縈飢飥餳飩餼飪飫飭飯飲餞飾飽飼飴餌饒餉餃",
	"餅餑餓餘餒餛餡館饋餿饞饃餾饈饉饅饊饌饢餱貝貞負貢財責賢敗賬貨質販貪貧貶購貯貫貳賤",
	"賁貰貼貴貺貸貿費賀貽賊贄賈賄貲賃賂贓資賅贐賕賑賚賒賦賭齎贖賞賜賡賠賧賴贅賻賺賽賾",
	"贗贊贇贈贍贏贛實瑣嗩頁頂頃項順須頊頑顧頓頎頒頌頏預顱領頗頸頡頰頜潁頦頤頻頹頷穎顆",
	"題顎顓顏額顳顢顛顙顥顫顰顴馬馭馮馱馴馳驅駁驢駔駛駟駙駒騶駐駝駑駕駘驛驍罵驕驊駱駭",
	"駢驪騁驗駿騏騎騍騅驂騙騭騷騖驁騮騫騸驃騾驄驟驥驤媽嗎瑪碼螞獁榪篤驀騰鳥鳧鳩雞鳶鳴",
	"鷗鴉鴇鴆鴣鶇鸕鴨鴞鴦鴟鴝鴛鴕鷥鷙鴯鴰鵂鴿鸞鴻鵓鸝鵑鵠鵝鵒鵜鵡鵲鵪鵯鵬鶉鶘鶚鶻鶿鶩",
	"鷂鶼鶴鸚鷓鷚鷯鷦鷲鷸鷺鷹鸛島梟裊蔦鶯魚魷魯魴鮁鮃鯰鮎鱸鮒鮑鱟鮐鮭鮚鮪鮞鱭鮫鮮鯗鱘",
	"鯁鱺鰱鰹鯉鰣鰷鯀鯊鯇鯽鯖鯪鯫鯡鯤鯧鯝鯢鯛鯨鯔鱝鰈鰓鱷鰍鰒鰉鯿鰲鰭鰨鰥鰩鰳鰾鱈鱉鰻",
	"鱅鱖鱔鱗鱒鱧蘇嚕擼櫓穌車軋軌軒軔轉軛輪軟轟軲軻轤軸軹軼軫轢軺輕軾載輊轎輇輅較輒輔",
	"輛輦輩輝輥輞輟輜輳輻輯輸轡轅轄輾轆轍轔陣庫連蓮漣褲揮暉琿惲葷渾軍塹暫漸慚斬嶄槧轂",
	"門閂閃閆閉問闖閏闈閒閎間閔悶閘鬧閨聞闥閩閭閥閣閡閫鬮閱閬閾閹閶鬩閽閻閼闡闌闃闊闋",
	"闔闐闕闞們捫燜澗襇簡憫見觀規覓視覽覺覬覡覿覦覯覲覷覘艦梘莧硯蜆現寬峴風颺颭颮颯颶",
	"颼飄飆楓瘋嵐韋韌韓韙韞韜違圍偉葦瑋煒幃齒齔齟齡齙齠齜齦齬齪齲齷嚙龍壟攏隴籠聾朧瓏",
	"瀧礱櫳嚨龐寵襲龔龕蘢矓曨麥麩黽黿鼉蠅澠鹵鹺龜侖倫掄淪圇倉槍搶蒼滄瘡艙創嗆蹌熗愴瑲",
	"區歐毆甌嘔軀樞摳嶇嫗漚瞘單彈撣禪蟬嬋憚鄲殫癉簞戰嘽發潑廢撥堯撓燒澆曉僥嬈翹蹺嶢磽",
	"蕘蟯橈嘵喬橋僑嬌矯嶠蕎撟鞽戔淺殘棧踐盞箋濺戧專傳磚團摶囀東凍棟陳崠當擋檔襠璫芻鄒",
	"趨雛皺盧廬蘆爐瀘櫨臚壚艫為偽執墊摯蟄盡燼堅腎豎慳監藍籃濫檻襤攬欖歷瀝櫪癧藶靂厲勵",
	"礪癘蠣糲夾俠峽狹挾莢蛺愜篋郟浹硤兩倆魎滿瞞蟎來萊睞崍徠淶棶麗儷邐酈華嘩樺曄燁會燴",
	"薈噲儈獪檜膾劊鄶岡剛崗網咼禍渦窩蝸萵亞啞惡壺堊婭椏氬埡瘂將蔣獎槳漿醬壽濤禱籌疇儔",
	"躊燾幬檮齊濟擠劑薺躋霽臍蠐齏儕嚌僉檢險劍臉簽斂殮儉撿薟瞼獫蘞澤擇釋嶧賣瀆犢牘櫝黷",
	"竇嚴儼釅義儀蟻艤樂礫爍櫟濼萬邁躉蠆與嶼舉譽歟興學攪黌嚳蘭攔欄爛瀾斕煉揀躓賓濱檳臏",
	"殯鬢嬪畢蹕篳嗶慣摜參慘滲摻磣糝毿聖檉寫瀉審嬸憲寶寧擰獰檸濘嚀聹對導層屬囑矚歲穢噦",
	"幣師獅篩螄帥帶滯幫廣擴礦曠獷壙廠慶應開異張帳脹漲長倀悵棖彎灣巒戀蠻欒孿孌攣臠灤變",
	"歸錄籙徹憶懷壞態驚撲掃揚楊瘍煬暘瑒護滬擔膽擁掛換喚煥瘓渙奐損據劇數樓摟僂嘍螻簍屢",
	"褸髏婁蔞嶁瘻耬斷舊顯濕術機幾嘰璣磯殺雜權勸歡條滌極構溝樣匯沒淚潔測側惻廁濃農膿噥",
	"儂潤溫滅燈鄧靈點煙熱爺牽猶獨燭觸濁獵臘蠟貓獻環還畫暢療遼癢鹽蓋盤睜掙爭箏猙崢礎禮",
	"離籬禿積窮竊競筆築節糧聯職幟熾肅蕭嘯瀟簫膚勝腳藝蘋榮營螢瑩滎熒勞撈澇嘮嶗癆耮塋煢",
	"嶸蠑藥獲蘿邏羅籮欏玀慮濾攄蟲蝦補裝趕躍遷適遞遺郵鄰鄭擲躑隊墜陽陰蔭階際陸隨隱癮難",
	"灘攤癱霧務靜黃橫國這個時過撾後關書電愛噯璦曖嬡親襯頭腦惱體業鄴產薩滻動慟運醞鄆進",
	"璡遠園選邊達撻韃躂噠種腫稱類漢嘆氣愾總從蓯聳慫樅眾傘無憮嫵蕪廡壓圖圓場腸湯燙蕩傷",
	"殤觴塊報聲處復奪奮婦孫遜蓀猻嶺莊樁髒戲標薦冊粵衛鄉響饗養僅廳雙葉號嚇聽啟員嗚詠喲",
	"囉噴噓墳壇壘備夠誇奧妝娛嬰尋爾塵嘗豈幀並廟棄彌彥徑憂憐懇悅懼懲憤願擾撫拋擬擄摑攙",
	"攝擺搖撐擻敵齋曇晉曬暈櫃樹夢橢櫻殲斃氈灑瀏淵漁潰滾潛災煩狀獄豬癡皚盜碩確礙穩竅筍",
	"罰罷羨習恥聶聰脅膠脈輿艷莖虜虛雖蝕蠶釁襪趙蹤躪遲隸靚韻飛丟喪豐臨麼烏買亂虧畝褻億",
	"價優傴侶偵俁債傾傯償儻儐儲儺兒兌兗茲獸囅決況淨涼減湊凜鳳憑凱擊鑿劉則刪別剗剄劌剴",
	"剮辦勱勁勢勳勩勻匭匱醫協臥卻厭厙廂厴廈廚廄廝縣靉靆敘疊唚噸吳吶嘸囈嚦唄噝嘜嗊啢嘖",
	"嗇囁嚶囂囪壢壩塢墾塏堖塒塤堝墮牆壯殼壼奩媯媧嫻嫿媼嬙嬤寢尷屜屆屨巋嶮嶔巔鞏巰幘幗",
	"冪廎廩弒弳懺慪懟懌懨愷愨懸憊慍憒懾憖懣懶懍戇戩掗撏搗摣撳擱攜擯攖攆擷攛攢晝傑棗梔",
	"柵櫛楨榿欞槨櫬櫚櫸檟櫧檣櫫櫥櫞歿殞氌氫氳洶灃溈澩涇窪湞澮滸潯潿澀淥漬瀋漵潷灩灄瀅",
	"澦灠瀠瀲濰瀦瀨瀕灝燦燉烴犛犧狽獮獼蝟獺璵璽琺璉瓊瓔瓚癤瘧皰癰痙癇瘮瘞癟癭癩癬癲皸",
	"眥礬碭硨磑磧禕禰禎稟祿稈穠穡窯竄窺窶筧籩簀籜簣籪籟糴秈糶糞罌羆羈羥骯脛腡膕齶膩靦",
	"膃艱薌萇苧繭蓽犖蕁藎葒蒞蒔蕕蓴蘀蔥蕆蕢薊蘺蕷鎣薔藺藹蘄蘊藪蘚虯蟣蠔蠱蟶蟈銜袞襖褌",
	"褳襝觶趲躒躚踴躡蹣躕躥躦辭辯辮邇逕跡鄺鄔鄖釃釀陘陝隉隕雋靄靨韉髖髕魘黶黲",
);

// Traditional characters that fold into a simplified form only in that
// direction. The simplified side is either written the same in both scripts
// (干, 里, 面) or already paired with a more common traditional form.
pub(super) const FOLD_SIMPLIFIED: &str = concat!(
	"纤饥余闲须获汇尽历朴仆叹复脏并征志斗云伙佣党冲冲划尸帘干干蒙蒙蒙签丑于松板岳御咸",
	"托淀游涌蝎腌谷郁里里面迹吁卤碱当台台台钟系系只只只制范姜卷了千才借克困霉弥辟曲舍",
	"坛向旋熏岩症折注致出苏团钟绣鸡弦荡恶胡哄鬓脏累肴杆冢凄栖瓮钵",
);

pub(super) const FOLD_TRADITIONAL: &str = concat!(
	"縴饑餘閑鬚穫彙儘曆樸僕歎複臟併徵誌鬥雲夥傭黨衝沖劃屍簾幹乾懞濛矇籤醜於鬆闆嶽禦鹹",
	"託澱遊湧蠍醃穀鬱裏裡麵蹟籲滷鹼噹颱臺檯鐘係繫隻祇衹製範薑捲瞭韆纔藉剋睏黴瀰闢麯捨",
	"罈嚮鏇燻巖癥摺註緻齣甦糰鍾綉鷄絃盪噁鬍鬨鬢髒纍餚桿塚淒棲甕缽",
);
